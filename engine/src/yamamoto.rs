//! Yamamoto's path-following method for one proper equilibrium
//!
//! Each player's strategies are ranked into classes by payoff. A strategy of
//! rank `r` (0-based) receives weight `lambda^r`, normalised by
//! `sum_{r < n} lambda^r`, so at `lambda = 1` every player mixes uniformly
//! and as `lambda -> 0` the mass concentrates on the best class. Strategies
//! sharing a class split their class's weight freely but must stay
//! indifferent, which gives one equation per strategy:
//!
//! - per class, a mass equation: `mass(class) * D(lambda) = sum of lambda^r`
//!   over the ranks the class occupies;
//! - per extra class member, an indifference equation against the class's
//!   first member.
//!
//! With `K` strategies in total this is `K` equations in `K + 1` unknowns
//! (the profile plus `lambda`). The predictor direction is the null vector of
//! the `K x (K + 1)` Jacobian, built from signed cofactor determinants:
//! component `j` is `(-1)^j det(H without column j)`, times a global
//! orientation. Steps are rescaled to a fixed Euclidean length.
//!
//! After each step the ranking is repaired: adjacent classes whose order has
//! flipped are merged, and a class whose top members have gathered the
//! weight of their ranks is split. Merges reverse the orientation; the first
//! step after any restructuring is then checked against the direction in
//! which the new ranking stays valid and reversed again if needed.

use crate::config::YamamotoConfig;
use crate::error::SolveError;
use crate::game::NormalFormGame;
use crate::mixed::MixedProfile;
use crate::partition::{PartitionRanking, RankClass};
use crate::status::StatusSink;
use nalgebra::DMatrix;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Lambda reached the floor.
    Converged,
    /// The step cap was hit first; the last profile is still returned.
    StepBudget,
    /// The status sink asked to stop.
    Cancelled,
}

/// Result of one continuation run.
#[derive(Debug, Clone)]
pub struct YamamotoReport<'g> {
    /// The equilibrium approximation; empty only when cancelled.
    pub equilibria: Vec<MixedProfile<'g>>,
    pub termination: Termination,
    /// Predictor steps applied.
    pub steps: usize,
    pub lambda: f64,
    pub merges: usize,
    pub splits: usize,
}

/// Headings smaller than this, relative to the largest tangent entry
/// times the payoff scale, count as zero.
const HEADING_TOLERANCE: f64 = 1e-9;

/// Progress as the furthest lambda reached so far, so reports never move
/// backwards when the path bends back in lambda.
#[derive(Debug, Clone, Copy)]
struct Progress {
    lowest: f64,
}

impl Progress {
    fn new(lambda: f64) -> Self {
        Progress { lowest: lambda }
    }

    fn observe(&mut self, lambda: f64) {
        self.lowest = self.lowest.min(lambda);
    }

    fn fraction(&self) -> f64 {
        (1.0 - self.lowest).clamp(0.0, 1.0)
    }
}

/// `sum_{r < n} lambda^r`
fn rank_weight_total(lambda: f64, n: usize) -> f64 {
    (0..n).map(|r| lambda.powi(r as i32)).sum()
}

/// `d/dlambda lambda^r`
fn rank_weight_deriv(lambda: f64, r: usize) -> f64 {
    if r == 0 {
        0.0
    } else {
        r as f64 * lambda.powi(r as i32 - 1)
    }
}

/// Structural change whose feasible direction fixes the next orientation.
#[derive(Debug, Clone)]
enum Restructure {
    /// Start of the path: lambda must decrease.
    Start,
    /// `upper` were the members of the better of the two merged classes;
    /// their mass has to fall below the weight of their ranks.
    Merged { player: usize, upper: Vec<usize> },
    /// The new upper class has to pull ahead of the lower one in payoff.
    Split {
        player: usize,
        upper: usize,
        lower: usize,
    },
}

/// Continuation state: profile, lambda, orientation and rankings.
struct Path<'g> {
    profile: MixedProfile<'g>,
    lambda: f64,
    orientation: f64,
    partitions: Vec<PartitionRanking>,
    pending: Option<Restructure>,
    merges: usize,
    splits: usize,
}

impl<'g> Path<'g> {
    /// Centroid profile, lambda = 1, strict payoff ranking.
    fn start(game: &'g NormalFormGame, config: &YamamotoConfig) -> Result<Self, SolveError> {
        if game.num_players() == 0 {
            return Err(SolveError::NoPlayers);
        }
        if let Some(player) = (0..game.num_players()).find(|&pl| game.num_strats(pl) == 0) {
            return Err(SolveError::EmptyPlayer { player });
        }
        let profile = MixedProfile::uniform(game);
        let tolerance = config.tie_tolerance * game.payoff_scale().max(1.0);
        let partitions = (0..game.num_players())
            .map(|pl| {
                let values: Vec<f64> = (0..game.num_strats(pl))
                    .map(|st| profile.strategy_value(pl, st))
                    .collect();
                PartitionRanking::by_payoff(&values, tolerance).map_err(|(first, second)| {
                    SolveError::TiedPayoffs {
                        player: pl,
                        first,
                        second,
                        value: values[first],
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Path {
            profile,
            lambda: 1.0,
            orientation: 1.0,
            partitions,
            pending: Some(Restructure::Start),
            merges: 0,
            splits: 0,
        })
    }

    /// `K x (K + 1)` Jacobian; the last column is the lambda derivative.
    fn jacobian(&self) -> DMatrix<f64> {
        let game = self.profile.game();
        let k = game.profile_length();
        let lambda = self.lambda;
        let mut h = DMatrix::zeros(k, k + 1);
        let mut row = 0;

        for (pl, ranking) in self.partitions.iter().enumerate() {
            let n = game.num_strats(pl);
            let own = self.profile.offset(pl);
            let total = rank_weight_total(lambda, n);
            let total_deriv: f64 = (0..n).map(|r| rank_weight_deriv(lambda, r)).sum();
            debug_assert_eq!(ranking.num_strategies(), n);

            for (c, class) in ranking.classes().iter().enumerate() {
                let ranked = ranking.rank_offset(c);
                // mass equation
                let mass: f64 = class.iter().map(|st| self.profile[(pl, st)]).sum();
                for st in class.iter() {
                    h[(row, own + st)] = total;
                }
                let share_deriv: f64 = (ranked..ranked + class.len())
                    .map(|r| rank_weight_deriv(lambda, r))
                    .sum();
                h[(row, k)] = mass * total_deriv - share_deriv;
                row += 1;

                // indifference with the first member
                let first = class.first();
                for st in class.iter().skip(1) {
                    for pl2 in (0..game.num_players()).filter(|&p| p != pl) {
                        let other = self.profile.offset(pl2);
                        for st2 in 0..game.num_strats(pl2) {
                            h[(row, other + st2)] = self.profile.payoff_deriv(pl, first, pl2, st2)
                                - self.profile.payoff_deriv(pl, st, pl2, st2);
                        }
                    }
                    row += 1;
                }
            }
        }
        debug_assert_eq!(row, k, "one equation per strategy");
        h
    }

    /// Oriented null vector of `h` by signed cofactors.
    fn tangent(&self, h: &DMatrix<f64>) -> Vec<f64> {
        (0..h.ncols())
            .map(|col| {
                let alternating = if col % 2 == 0 { 1.0 } else { -1.0 };
                self.orientation * alternating * h.clone().remove_column(col).determinant()
            })
            .collect()
    }

    /// Rate at which `tangent` moves into the region where the ranking
    /// produced by `change` is valid. Negative means the orientation is
    /// backwards.
    fn heading(&self, change: &Restructure, tangent: &[f64]) -> f64 {
        let game = self.profile.game();
        match change {
            Restructure::Start => -tangent[tangent.len() - 1],
            Restructure::Merged { player, upper } => {
                let own = self.profile.offset(*player);
                -upper.iter().map(|&st| tangent[own + st]).sum::<f64>()
            }
            Restructure::Split {
                player,
                upper,
                lower,
            } => (0..game.num_players())
                .filter(|&pl| pl != *player)
                .flat_map(|pl| (0..game.num_strats(pl)).map(move |st| (pl, st)))
                .map(|(pl, st)| {
                    let gap = self.profile.payoff_deriv(*player, *upper, pl, st)
                        - self.profile.payoff_deriv(*player, *lower, pl, st);
                    gap * tangent[self.profile.offset(pl) + st]
                })
                .sum(),
        }
    }

    /// One predictor step followed by ranking repair.
    fn advance(&mut self, step: usize, config: &YamamotoConfig) -> Result<(), SolveError> {
        let h = self.jacobian();
        let mut tangent = self.tangent(&h);

        if let Some(change) = self.pending.take() {
            let mut heading = self.heading(&change, &tangent);
            let scale = tangent.iter().map(|t| t.abs()).fold(0.0, f64::max)
                * self.profile.game().payoff_scale().max(1.0);
            if heading.abs() <= HEADING_TOLERANCE * scale {
                // the new ranking does not pin the direction down
                heading = self.heading(&Restructure::Start, &tangent);
            }
            if heading < 0.0 {
                self.orientation = -self.orientation;
                tangent.iter_mut().for_each(|t| *t = -*t);
                log::debug!("step {:>6}: reversed predictor after {:?}", step, change);
            }
        }

        let norm = tangent.iter().map(|t| t * t).sum::<f64>().sqrt();
        if !(norm.is_finite() && norm > 0.0) {
            log::warn!("degenerate jacobian at step {} (lambda = {:.6})", step, self.lambda);
            return Err(SolveError::Degenerate {
                step,
                lambda: self.lambda,
            });
        }
        let scale = config.step_size / norm;
        let k = h.nrows();
        let delta: Vec<f64> = tangent[..k].iter().map(|t| t * scale).collect();
        self.profile.add_step(&delta);
        self.lambda += tangent[k] * scale;
        self.check_feasible(step, config)?;

        for player in 0..self.partitions.len() {
            self.repair(player, step);
        }
        Ok(())
    }

    /// Lambda may not climb above 1 and no probability may go negative,
    /// each up to `feasibility_tolerance`.
    fn check_feasible(&self, step: usize, config: &YamamotoConfig) -> Result<(), SolveError> {
        let tolerance = config.feasibility_tolerance;
        let lowest = self
            .profile
            .as_slice()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        if self.lambda > 1.0 + tolerance || lowest < -tolerance {
            log::warn!(
                "path left the feasible region at step {} (lambda = {:.6}, lowest probability = {:.6})",
                step,
                self.lambda,
                lowest
            );
            return Err(SolveError::Infeasible {
                step,
                lambda: self.lambda,
                probability: lowest,
            });
        }
        Ok(())
    }

    /// Merge classes whose order flipped and split classes whose leaders
    /// have earned separate ranks.
    fn repair(&mut self, player: usize, step: usize) {
        let n = self.profile.game().num_strats(player);
        let mut ranking = self.partitions[player].clone();
        let mut k = 0;

        while k < ranking.len() {
            let flipped = k + 1 < ranking.len()
                && self.profile.strategy_value(player, ranking.class(k).first())
                    <= self.profile.strategy_value(player, ranking.class(k + 1).first());
            if flipped {
                let upper: Vec<usize> = ranking.class(k).iter().collect();
                ranking = ranking.merge(k);
                self.orientation = -self.orientation;
                self.merges += 1;
                self.pending.get_or_insert(Restructure::Merged { player, upper });
                log::debug!(
                    "step {:>6}: player {} merged classes {} and {} (lambda = {:.6})",
                    step,
                    player,
                    k,
                    k + 1,
                    self.lambda
                );
            } else if ranking.class(k).len() > 1 {
                let ranked = ranking.rank_offset(k);
                if let Some(top) = self.split_point(player, ranking.class(k), ranked, n) {
                    ranking = ranking.split(k, &top);
                    self.splits += 1;
                    self.pending.get_or_insert(Restructure::Split {
                        player,
                        upper: ranking.class(k).first(),
                        lower: ranking.class(k + 1).first(),
                    });
                    log::debug!(
                        "step {:>6}: player {} split class {} after {} of {} members (lambda = {:.6})",
                        step,
                        player,
                        k,
                        top.len(),
                        top.len() + ranking.class(k + 1).len(),
                        self.lambda
                    );
                }
            }
            k += 1;
        }
        self.partitions[player] = ranking;
    }

    /// Smallest leading group (by probability) of `class` whose mass has
    /// reached the weight of the ranks it would occupy.
    fn split_point(&self, player: usize, class: &RankClass, ranked: usize, n: usize) -> Option<Vec<usize>> {
        let mut sorted: Vec<usize> = class.iter().collect();
        sorted.sort_by(|&a, &b| {
            self.profile[(player, b)]
                .total_cmp(&self.profile[(player, a)])
                .then(a.cmp(&b))
        });
        let total = rank_weight_total(self.lambda, n);
        let mut target = 0.0;
        let mut mass = 0.0;
        for i in 0..sorted.len() - 1 {
            target += self.lambda.powi((ranked + i) as i32) / total;
            mass += self.profile[(player, sorted[i])];
            if mass >= target {
                return Some(sorted[..=i].to_vec());
            }
        }
        None
    }
}

/// Yamamoto continuation solver.
#[derive(Debug, Clone, Default)]
pub struct YamamotoSolver {
    config: YamamotoConfig,
}

impl YamamotoSolver {
    pub fn new(config: YamamotoConfig) -> Self {
        YamamotoSolver { config }
    }

    pub fn config(&self) -> &YamamotoConfig {
        &self.config
    }

    /// Follow the path from the centroid until lambda reaches the floor.
    ///
    /// The status sink is polled, then given progress `1 - lambda` for the
    /// smallest lambda reached so far, before every step whose number is a
    /// multiple of `report_interval`. A path that leaves the feasible region
    /// ends with [`SolveError::Infeasible`].
    pub fn solve<'g, S: StatusSink + ?Sized>(
        &self,
        game: &'g NormalFormGame,
        status: &mut S,
    ) -> Result<YamamotoReport<'g>, SolveError> {
        let config = &self.config;
        let mut path = Path::start(game, config)?;
        log::info!(
            "{:<32}{:<32}",
            "starting yamamoto",
            format!("{:?} strategies", game.dimensions())
        );

        let mut progress = Progress::new(path.lambda);
        let mut steps = 0;
        while steps < config.max_steps && path.lambda > config.lambda_floor {
            let step = steps + 1;
            if config.report_interval > 0 && step % config.report_interval == 0 {
                if status.poll().is_err() {
                    log::info!("cancelled before step {} (lambda = {:.6})", step, path.lambda);
                    return Ok(YamamotoReport {
                        equilibria: Vec::new(),
                        termination: Termination::Cancelled,
                        steps,
                        lambda: path.lambda,
                        merges: path.merges,
                        splits: path.splits,
                    });
                }
                status.set_progress(progress.fraction(), &format!("Lambda = {}", path.lambda));
            }
            path.advance(step, config)?;
            progress.observe(path.lambda);
            steps = step;
        }

        let termination = if path.lambda <= config.lambda_floor {
            Termination::Converged
        } else {
            Termination::StepBudget
        };
        log::info!(
            "{:<32}{:<32}",
            format!("yamamoto {:?}", termination),
            format!("{} steps, lambda = {:.6}, {} merges, {} splits", steps, path.lambda, path.merges, path.splits)
        );
        Ok(YamamotoReport {
            equilibria: vec![path.profile],
            termination,
            steps,
            lambda: path.lambda,
            merges: path.merges,
            splits: path.splits,
        })
    }
}

/// Solve with default settings and return the equilibrium list: one
/// profile, or none if the sink cancelled the run.
pub fn yamamoto<'g, S: StatusSink + ?Sized>(
    game: &'g NormalFormGame,
    status: &mut S,
) -> Result<Vec<MixedProfile<'g>>, SolveError> {
    YamamotoSolver::default()
        .solve(game, status)
        .map(|report| report.equilibria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        crossed_preferences, duplicate_strategy, matching_pennies, prisoners_dilemma, rank_reversal,
        single_strategy,
    };
    use crate::status::{Cancelled, NullStatus};

    #[derive(Default)]
    struct Recorder {
        polls: usize,
        cancel_after: Option<usize>,
        progress: Vec<f64>,
        messages: Vec<String>,
    }

    impl StatusSink for Recorder {
        fn poll(&mut self) -> Result<(), Cancelled> {
            self.polls += 1;
            match self.cancel_after {
                Some(limit) if self.polls > limit => Err(Cancelled),
                _ => Ok(()),
            }
        }

        fn set_progress(&mut self, fraction: f64, message: &str) {
            self.progress.push(fraction);
            self.messages.push(message.to_string());
        }
    }

    #[test]
    fn test_rank_weights() {
        assert!((rank_weight_total(0.5, 3) - 1.75).abs() < 1e-15);
        assert_eq!(rank_weight_total(1.0, 4), 4.0);
        assert_eq!(rank_weight_deriv(0.5, 0), 0.0);
        assert!((rank_weight_deriv(0.5, 2) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_jacobian_at_start_is_permuted_diagonal() {
        let game = prisoners_dilemma();
        let path = Path::start(&game, &YamamotoConfig::default()).unwrap();
        let h = path.jacobian();
        assert_eq!(h.shape(), (4, 5));
        // defect (strategy 1) ranks first for both players
        assert_eq!(h[(0, 1)], 2.0);
        assert_eq!(h[(1, 0)], 2.0);
        assert_eq!(h[(2, 3)], 2.0);
        assert_eq!(h[(3, 2)], 2.0);
        // lambda column: mass * D'(1) - rank derivative
        assert!((h[(0, 4)] - 0.5).abs() < 1e-12);
        assert!((h[(1, 4)] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_is_null_vector() {
        let game = rank_reversal();
        let path = Path::start(&game, &YamamotoConfig::default()).unwrap();
        let h = path.jacobian();
        let t = nalgebra::DVector::from_vec(path.tangent(&h));
        let residual = &h * &t;
        assert!(residual.norm() < 1e-9 * t.norm());
    }

    #[test]
    fn test_prisoners_dilemma_converges() {
        let game = prisoners_dilemma();
        let report = YamamotoSolver::default().solve(&game, &mut NullStatus).unwrap();
        assert_eq!(report.termination, Termination::Converged);
        assert!(report.lambda <= 0.01);
        assert!(report.steps < 50_000);
        assert_eq!(report.equilibria.len(), 1);
        let profile = &report.equilibria[0];
        for pl in 0..2 {
            assert!((profile.player_sum(pl) - 1.0).abs() < 1e-6, "player {} sum", pl);
            assert!(profile[(pl, 1)] > 0.95, "player {} should defect", pl);
        }
        assert_eq!(report.merges, 0);
        assert!(profile.max_regret() < 0.05);
    }

    #[test]
    fn test_rank_reversal_merges_then_splits() {
        let game = rank_reversal();
        let report = YamamotoSolver::default().solve(&game, &mut NullStatus).unwrap();
        assert_eq!(report.termination, Termination::Converged);
        assert_eq!(report.merges, 1);
        assert_eq!(report.splits, 1);
        let profile = &report.equilibria[0];
        assert!((profile.player_sum(0) - 1.0).abs() < 1e-6);
        assert!((profile.player_sum(1) - 1.0).abs() < 1e-6);
        assert!(profile[(0, 1)] > 0.95);
        assert!(profile[(1, 1)] > 0.95);
    }

    #[test]
    fn test_fully_mixed_equilibrium_is_found() {
        let game = crossed_preferences();
        let mut sink = Recorder::default();
        let report = YamamotoSolver::default().solve(&game, &mut sink).unwrap();
        assert_eq!(report.termination, Termination::Converged);
        assert!(report.lambda <= 0.01);
        assert!(report.merges >= 2);
        let profile = &report.equilibria[0];
        let expected = [0.25, 0.75, 1.0 / 3.0, 2.0 / 3.0];
        for (got, want) in profile.as_slice().iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "{} vs {}", got, want);
        }
        assert!((profile.player_sum(0) - 1.0).abs() < 1e-6);
        assert!((profile.player_sum(1) - 1.0).abs() < 1e-6);
        assert!(profile.max_regret() < 0.05);
        assert!(sink.progress.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_progress_never_moves_backwards() {
        let mut progress = Progress::new(1.0);
        let mut seen = Vec::new();
        for lambda in [0.6, 0.55, 0.58, 0.57, 0.4] {
            progress.observe(lambda);
            seen.push(progress.fraction());
        }
        let expected = [0.4, 0.45, 0.45, 0.45, 0.6];
        for (got, want) in seen.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_overlong_steps_are_infeasible() {
        let game = prisoners_dilemma();
        let config = YamamotoConfig {
            step_size: 0.9,
            ..YamamotoConfig::default()
        };
        // the second step drives cooperation to about -0.044
        let err = YamamotoSolver::new(config).solve(&game, &mut NullStatus).unwrap_err();
        match err {
            SolveError::Infeasible { step, probability, .. } => {
                assert_eq!(step, 2);
                assert!(probability < -1e-3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lambda_above_one_is_infeasible() {
        let game = prisoners_dilemma();
        let config = YamamotoConfig::default();
        let mut path = Path::start(&game, &config).unwrap();
        assert!(path.check_feasible(1, &config).is_ok());
        path.lambda = 1.0005;
        assert!(path.check_feasible(1, &config).is_ok());
        path.lambda = 1.5;
        assert!(matches!(
            path.check_feasible(7, &config),
            Err(SolveError::Infeasible { step: 7, .. })
        ));
    }

    #[test]
    fn test_progress_reports_every_interval() {
        let game = prisoners_dilemma();
        let mut sink = Recorder::default();
        let report = YamamotoSolver::default().solve(&game, &mut sink).unwrap();
        assert_eq!(sink.progress.len(), report.steps / 25);
        assert!(sink.progress.windows(2).all(|w| w[0] <= w[1]));
        assert!(sink.progress.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert!(sink.messages[0].starts_with("Lambda = "));
    }

    #[test]
    fn test_fixed_length_run_reports_floor_of_steps() {
        let game = prisoners_dilemma();
        let config = YamamotoConfig {
            max_steps: 110,
            ..YamamotoConfig::default()
        };
        let mut sink = Recorder::default();
        let report = YamamotoSolver::new(config).solve(&game, &mut sink).unwrap();
        assert_eq!(report.termination, Termination::StepBudget);
        assert_eq!(report.steps, 110);
        assert_eq!(sink.progress.len(), 4);
        assert_eq!(report.equilibria.len(), 1);
    }

    #[test]
    fn test_cancellation_returns_empty_result() {
        let game = prisoners_dilemma();
        let mut sink = Recorder {
            cancel_after: Some(1),
            ..Recorder::default()
        };
        let report = YamamotoSolver::default().solve(&game, &mut sink).unwrap();
        assert_eq!(report.termination, Termination::Cancelled);
        assert!(report.equilibria.is_empty());
        // polled before steps 25 and 50; the second poll cancels
        assert_eq!(report.steps, 49);
        assert_eq!(sink.progress.len(), 1);
    }

    #[test]
    fn test_identical_strategies_are_rejected() {
        let game = duplicate_strategy();
        let err = YamamotoSolver::default().solve(&game, &mut NullStatus).unwrap_err();
        assert!(matches!(
            err,
            SolveError::TiedPayoffs { player: 0, first: 0, second: 1, .. }
        ));
        assert!(yamamoto(&game, &mut NullStatus).is_err());
        // every strategy is worth 0 at the centroid
        let pennies = matching_pennies();
        assert!(matches!(
            yamamoto(&pennies, &mut NullStatus),
            Err(SolveError::TiedPayoffs { .. })
        ));
    }

    #[test]
    fn test_single_strategy_players_converge_trivially() {
        let game = single_strategy();
        let solutions = yamamoto(&game, &mut NullStatus).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn test_players_without_strategies_are_rejected() {
        let game = NormalFormGame::new(&[2, 0]);
        let err = YamamotoSolver::default().solve(&game, &mut NullStatus).unwrap_err();
        assert_eq!(err, SolveError::EmptyPlayer { player: 1 });
        let empty = NormalFormGame::new(&[]);
        assert_eq!(
            YamamotoSolver::default().solve(&empty, &mut NullStatus).unwrap_err(),
            SolveError::NoPlayers
        );
    }
}
