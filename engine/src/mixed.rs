//! Mixed strategy profiles
//!
//! Probabilities are stored in one flat vector, player-major, in the same
//! column order the continuation Jacobian uses. The profile borrows its game,
//! so the game cannot be mutated while a profile derived from it is alive.

use crate::game::NormalFormGame;
use crate::profile::Contingencies;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct MixedProfile<'g> {
    game: &'g NormalFormGame,
    /// offsets[pl] = position of player pl's first strategy in `probs`
    offsets: Vec<usize>,
    probs: Vec<f64>,
}

impl<'g> MixedProfile<'g> {
    /// Centroid profile: every player mixes uniformly.
    pub fn uniform(game: &'g NormalFormGame) -> Self {
        let mut probs = Vec::with_capacity(game.profile_length());
        for &count in game.dimensions() {
            probs.extend(std::iter::repeat(1.0 / count as f64).take(count));
        }
        Self::from_vec(game, probs)
    }

    /// Wrap a flat probability vector. Panics if the length does not match
    /// the game's total strategy count.
    pub fn from_vec(game: &'g NormalFormGame, probs: Vec<f64>) -> Self {
        assert_eq!(
            probs.len(),
            game.profile_length(),
            "mixed profile length must equal the total strategy count"
        );
        let offsets = game
            .dimensions()
            .iter()
            .scan(0, |acc, &count| {
                let start = *acc;
                *acc += count;
                Some(start)
            })
            .collect();
        MixedProfile { game, offsets, probs }
    }

    pub fn game(&self) -> &'g NormalFormGame {
        self.game
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Column of `(player, 0)` in the flat layout.
    pub fn offset(&self, player: usize) -> usize {
        self.offsets[player]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Probabilities of one player's strategies.
    pub fn player(&self, player: usize) -> &[f64] {
        let start = self.offsets[player];
        &self.probs[start..start + self.game.num_strats(player)]
    }

    pub fn player_sum(&self, player: usize) -> f64 {
        self.player(player).iter().sum()
    }

    /// Add a step vector in flat layout.
    pub fn add_step(&mut self, delta: &[f64]) {
        assert_eq!(delta.len(), self.probs.len(), "step length mismatch");
        for (p, d) in self.probs.iter_mut().zip(delta) {
            *p += d;
        }
    }

    /// Expected payoff to `player` when the `fixed` players play the given
    /// pure strategies and everyone else follows this profile.
    fn conditional_payoff(&self, player: usize, fixed: &[(usize, usize)]) -> f64 {
        Contingencies::with_fixed(self.game, fixed)
            .map(|profile| {
                let weight: f64 = (0..self.game.num_players())
                    .filter(|pl| fixed.iter().all(|&(f, _)| f != *pl))
                    .map(|pl| self[(pl, profile.strategy(pl))])
                    .product();
                if weight == 0.0 {
                    0.0
                } else {
                    weight * self.game.payoff_at(profile.index(), player)
                }
            })
            .sum()
    }

    /// Expected payoff of `player` from playing `strategy` against the rest
    /// of the profile.
    pub fn strategy_value(&self, player: usize, strategy: usize) -> f64 {
        self.conditional_payoff(player, &[(player, strategy)])
    }

    /// Partial derivative of `strategy_value(player, strategy)` with respect
    /// to `other`'s probability of `other_strategy`. Zero when `other` is
    /// `player` itself.
    pub fn payoff_deriv(
        &self,
        player: usize,
        strategy: usize,
        other: usize,
        other_strategy: usize,
    ) -> f64 {
        if other == player {
            return 0.0;
        }
        self.conditional_payoff(player, &[(player, strategy), (other, other_strategy)])
    }

    /// Expected payoff of `player` under the whole profile.
    pub fn payoff(&self, player: usize) -> f64 {
        self.conditional_payoff(player, &[])
    }

    /// Largest gain any player could get by switching to a pure strategy.
    pub fn max_regret(&self) -> f64 {
        (0..self.game.num_players())
            .map(|pl| {
                let current = self.payoff(pl);
                (0..self.game.num_strats(pl))
                    .map(|st| self.strategy_value(pl, st) - current)
                    .fold(0.0, f64::max)
            })
            .fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for MixedProfile<'_> {
    type Output = f64;

    fn index(&self, (player, strategy): (usize, usize)) -> &f64 {
        assert!(strategy < self.game.num_strats(player), "strategy {} out of range", strategy);
        &self.probs[self.offsets[player] + strategy]
    }
}

impl IndexMut<(usize, usize)> for MixedProfile<'_> {
    fn index_mut(&mut self, (player, strategy): (usize, usize)) -> &mut f64 {
        assert!(strategy < self.game.num_strats(player), "strategy {} out of range", strategy);
        &mut self.probs[self.offsets[player] + strategy]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{prisoners_dilemma, three_player_majority};

    #[test]
    fn test_uniform_sums_to_one() {
        let game = NormalFormGame::new(&[3, 4, 1]);
        let profile = MixedProfile::uniform(&game);
        assert_eq!(profile.len(), 8);
        for pl in 0..3 {
            assert!((profile.player_sum(pl) - 1.0).abs() < 1e-12);
        }
        assert_eq!(profile.offset(2), 7);
    }

    #[test]
    fn test_strategy_values_at_centroid() {
        let game = prisoners_dilemma();
        let profile = MixedProfile::uniform(&game);
        // Cooperate: (3 + 0) / 2, defect: (5 + 1) / 2
        assert!((profile.strategy_value(0, 0) - 1.5).abs() < 1e-12);
        assert!((profile.strategy_value(0, 1) - 3.0).abs() < 1e-12);
        assert!((profile.strategy_value(1, 1) - 3.0).abs() < 1e-12);
        assert!((profile.payoff(0) - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_payoff_deriv_two_player_is_matrix_entry() {
        let game = prisoners_dilemma();
        let profile = MixedProfile::uniform(&game);
        assert_eq!(profile.payoff_deriv(0, 0, 1, 1), 0.0);
        assert_eq!(profile.payoff_deriv(0, 1, 1, 0), 5.0);
        assert_eq!(profile.payoff_deriv(1, 0, 0, 0), 3.0);
        assert_eq!(profile.payoff_deriv(0, 0, 0, 1), 0.0);
    }

    #[test]
    fn test_payoff_deriv_three_player_mixes_third() {
        let game = three_player_majority();
        let profile = MixedProfile::uniform(&game);
        // Player 0 on strategy 0, player 1 on strategy 0: majority regardless
        // of player 2, so the payoff is 1.
        assert!((profile.payoff_deriv(0, 0, 1, 0) - 1.0).abs() < 1e-12);
        // Player 1 disagrees: player 2 decides, half the time with player 0.
        assert!((profile.payoff_deriv(0, 0, 1, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_max_regret_zero_at_pure_equilibrium() {
        let game = prisoners_dilemma();
        let profile = MixedProfile::from_vec(&game, vec![0.0, 1.0, 0.0, 1.0]);
        assert!(profile.max_regret().abs() < 1e-12);
        let centroid = MixedProfile::uniform(&game);
        assert!((centroid.max_regret() - 0.75).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "total strategy count")]
    fn test_from_vec_rejects_wrong_length() {
        let game = prisoners_dilemma();
        MixedProfile::from_vec(&game, vec![0.5; 3]);
    }
}
