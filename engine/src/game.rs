//! Normal-form game model
//!
//! A game owns its players (fixed at construction from a dimension vector)
//! and a dynamic arena of outcomes. Strategy profiles map to outcomes through
//! a flat results array addressed by a mixed-radix index: player 0's
//! strategy varies fastest, and strategy `j` of player `i` contributes
//! `j * offset_i`, where `offset_i` is the product of the strategy counts of
//! players `0..i`.
//!
//! Every structural or payoff mutation bumps a revision counter. The `f64`
//! payoff mirrors are tagged with the revision they were computed at, so
//! [`NormalFormGame::init_payoffs`] only does work after a mutation.

use crate::outcome::{to_f64, Outcome, OutcomeHandle};
use crate::profile::StrategyProfile;
use num_rational::BigRational;
use num_traits::Zero;
use std::cell::Cell;

/// One choice available to a player.
#[derive(Debug, Clone)]
pub struct Strategy {
    /// 1-based ordinal within the owning player
    number: usize,
    /// Contribution to the flat profile index
    index: usize,
    name: String,
}

impl Strategy {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An agent with a fixed, ordered set of strategies.
#[derive(Debug, Clone)]
pub struct Player {
    /// 1-based
    number: usize,
    name: String,
    strategies: Vec<Strategy>,
}

impl Player {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn num_strats(&self) -> usize {
        self.strategies.len()
    }
}

/// Finite game in strategic form.
#[derive(Debug)]
pub struct NormalFormGame {
    title: String,
    comment: String,
    dimensions: Vec<usize>,
    players: Vec<Player>,
    outcomes: Vec<Outcome>,
    /// results[flat index] = position of the outcome in `outcomes`
    results: Vec<Option<usize>>,
    revision: u64,
    /// Revision at which the payoff mirrors were last rebuilt
    outcome_revision: Option<u64>,
    /// Unsaved changes since the last successful write
    dirty: Cell<bool>,
}

impl NormalFormGame {
    /// Create a game with `dimensions[i]` strategies for player `i`.
    ///
    /// Players are named `"1"`, `"2"`, ... and strategies likewise; every
    /// result cell starts empty.
    pub fn new(dimensions: &[usize]) -> Self {
        let players = dimensions
            .iter()
            .enumerate()
            .map(|(pl, &count)| Player {
                number: pl + 1,
                name: (pl + 1).to_string(),
                strategies: (0..count)
                    .map(|st| Strategy {
                        number: st + 1,
                        index: 0,
                        name: (st + 1).to_string(),
                    })
                    .collect(),
            })
            .collect();
        let cells = dimensions.iter().product();
        let mut game = NormalFormGame {
            title: "UNTITLED".to_string(),
            comment: String::new(),
            dimensions: dimensions.to_vec(),
            players,
            outcomes: Vec::new(),
            results: vec![None; cells],
            revision: 0,
            outcome_revision: None,
            dirty: Cell::new(false),
        };
        game.index_strategies();
        game
    }

    fn index_strategies(&mut self) {
        let mut offset = 1;
        for player in &mut self.players {
            for (j, strategy) in player.strategies.iter_mut().enumerate() {
                strategy.index = j * offset;
            }
            offset *= player.strategies.len();
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty.set(true);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
        self.touch();
    }

    /// Monotonic mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Forget unsaved changes; used after a successful write or load.
    pub fn mark_clean(&self) {
        self.dirty.set(false);
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player: usize) -> &Player {
        &self.players[player]
    }

    /// Strategy count of `player`, or 0 if there is no such player.
    pub fn num_strats(&self, player: usize) -> usize {
        self.players.get(player).map_or(0, Player::num_strats)
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// Total number of strategies over all players.
    pub fn profile_length(&self) -> usize {
        self.dimensions.iter().sum()
    }

    /// Number of pure strategy profiles (result cells).
    pub fn num_profiles(&self) -> usize {
        self.results.len()
    }

    pub fn set_player_name(&mut self, player: usize, name: impl Into<String>) {
        self.players[player].name = name.into();
    }

    pub fn set_strategy_name(&mut self, player: usize, strategy: usize, name: impl Into<String>) {
        self.players[player].strategies[strategy].name = name.into();
    }

    /// Flat results index of a per-player strategy vector.
    ///
    /// Panics if the vector has the wrong length or names a strategy the
    /// player does not have.
    pub fn flat_index(&self, strategies: &[usize]) -> usize {
        assert_eq!(
            strategies.len(),
            self.players.len(),
            "profile must name one strategy per player"
        );
        strategies
            .iter()
            .zip(self.players.iter())
            .map(|(&st, player)| {
                assert!(
                    st < player.strategies.len(),
                    "strategy {} out of range for player {}",
                    st,
                    player.number
                );
                player.strategies[st].index
            })
            .sum()
    }

    // ---------------------------------------------------------------
    // Outcomes
    // ---------------------------------------------------------------

    pub fn num_outcomes(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcomes in id order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    fn position(&self, handle: OutcomeHandle) -> Option<usize> {
        self.outcomes.iter().position(|o| o.handle() == handle)
    }

    fn live_position(&self, handle: OutcomeHandle) -> usize {
        self.position(handle)
            .expect("outcome handle does not belong to this game")
    }

    pub fn outcome(&self, handle: OutcomeHandle) -> Option<&Outcome> {
        self.position(handle).map(|pos| &self.outcomes[pos])
    }

    /// Current 1-based id of an outcome; `None` once it has been deleted.
    pub fn outcome_id(&self, handle: OutcomeHandle) -> Option<usize> {
        self.position(handle).map(|pos| pos + 1)
    }

    /// Handle of the outcome with 1-based id `id`.
    pub fn outcome_by_id(&self, id: usize) -> Option<OutcomeHandle> {
        id.checked_sub(1)
            .and_then(|pos| self.outcomes.get(pos))
            .map(Outcome::handle)
    }

    /// Append an outcome with zero payoffs; its id is the new outcome count.
    pub fn new_outcome(&mut self) -> OutcomeHandle {
        self.touch();
        let outcome = Outcome::new(self.outcomes.len() + 1, self.players.len());
        let handle = outcome.handle();
        self.outcomes.push(outcome);
        handle
    }

    /// Remove an outcome, clearing every cell that referenced it and
    /// renumbering the remaining outcomes densely.
    ///
    /// Returns `false` (and changes nothing) if the handle is already dead.
    pub fn delete_outcome(&mut self, handle: OutcomeHandle) -> bool {
        let Some(pos) = self.position(handle) else {
            return false;
        };
        self.touch();
        for cell in &mut self.results {
            *cell = match *cell {
                Some(p) if p == pos => None,
                Some(p) if p > pos => Some(p - 1),
                other => other,
            };
        }
        self.outcomes.remove(pos);
        for (i, outcome) in self.outcomes.iter_mut().enumerate() {
            outcome.set_id(i + 1);
        }
        true
    }

    pub fn set_label(&mut self, handle: OutcomeHandle, label: impl Into<String>) {
        if let Some(pos) = self.position(handle) {
            self.outcomes[pos].set_label(label.into());
        }
    }

    /// Write the exact payoff and its mirror for one player.
    pub fn set_payoff(&mut self, handle: OutcomeHandle, player: usize, value: BigRational) {
        assert!(player < self.players.len(), "player {} out of range", player);
        let pos = self.live_position(handle);
        self.outcomes[pos].set_payoff(player, value);
        self.touch();
    }

    /// Exact payoff; zero for a dead handle.
    pub fn payoff(&self, handle: OutcomeHandle, player: usize) -> BigRational {
        self.outcome(handle)
            .map(|o| o.payoff(player).clone())
            .unwrap_or_else(BigRational::zero)
    }

    // ---------------------------------------------------------------
    // Result cells
    // ---------------------------------------------------------------

    pub fn set_outcome(&mut self, strategies: &[usize], outcome: Option<OutcomeHandle>) {
        let index = self.flat_index(strategies);
        self.write_cell(index, outcome);
        self.touch();
    }

    pub fn get_outcome(&self, strategies: &[usize]) -> Option<OutcomeHandle> {
        self.outcome_at(self.flat_index(strategies))
    }

    pub fn set_profile_outcome(&mut self, profile: &StrategyProfile, outcome: Option<OutcomeHandle>) {
        self.write_cell(profile.index(), outcome);
        self.touch();
    }

    pub fn profile_outcome(&self, profile: &StrategyProfile) -> Option<OutcomeHandle> {
        self.outcome_at(profile.index())
    }

    /// Raw cell write by flat index. Does not bump the revision; meant for
    /// bulk loading where the caller bumps it once.
    pub fn set_outcome_at(&mut self, index: usize, outcome: Option<OutcomeHandle>) {
        self.write_cell(index, outcome);
    }

    pub fn outcome_at(&self, index: usize) -> Option<OutcomeHandle> {
        self.results[index].map(|pos| self.outcomes[pos].handle())
    }

    fn write_cell(&mut self, index: usize, outcome: Option<OutcomeHandle>) {
        assert!(index < self.results.len(), "profile index {} out of range", index);
        let cell = outcome.map(|h| self.live_position(h));
        self.results[index] = cell;
    }

    /// 1-based outcome id at a flat index, 0 for an empty cell.
    pub fn outcome_id_at(&self, index: usize) -> usize {
        self.results[index].map_or(0, |pos| pos + 1)
    }

    /// Mirrored payoff to `player` at a flat index; empty cells pay zero.
    pub fn payoff_at(&self, index: usize, player: usize) -> f64 {
        match self.results[index] {
            Some(pos) => self.outcomes[pos].payoff_f64(player),
            None => 0.0,
        }
    }

    /// Exact counterpart of [`payoff_at`](Self::payoff_at).
    pub fn exact_payoff_at(&self, index: usize, player: usize) -> BigRational {
        match self.results[index] {
            Some(pos) => self.outcomes[pos].payoff(player).clone(),
            None => BigRational::zero(),
        }
    }

    /// Rebuild the `f64` payoff mirrors if the game changed since the last
    /// rebuild. Returns whether any work was done.
    pub fn init_payoffs(&mut self) -> bool {
        if self.outcome_revision == Some(self.revision) {
            return false;
        }
        for outcome in &mut self.outcomes {
            outcome.refresh_mirror();
        }
        self.outcome_revision = Some(self.revision);
        log::debug!(
            "refreshed payoff mirrors for {} outcomes at revision {}",
            self.outcomes.len(),
            self.revision
        );
        true
    }

    /// Largest absolute mirrored payoff, used to scale tolerances.
    pub fn payoff_scale(&self) -> f64 {
        self.outcomes
            .iter()
            .flat_map(|o| o.payoffs().iter())
            .map(|p| to_f64(p).abs())
            .fold(0.0, f64::max)
    }
}

impl Clone for NormalFormGame {
    /// Deep copy. Outcomes keep their handles, so a handle taken from the
    /// original resolves to the corresponding outcome of the copy; the two
    /// games share no mutable state. The copy starts clean at revision 0.
    fn clone(&self) -> Self {
        NormalFormGame {
            title: self.title.clone(),
            comment: self.comment.clone(),
            dimensions: self.dimensions.clone(),
            players: self.players.clone(),
            outcomes: self.outcomes.clone(),
            results: self.results.clone(),
            revision: 0,
            outcome_revision: None,
            dirty: Cell::new(false),
        }
    }
}
