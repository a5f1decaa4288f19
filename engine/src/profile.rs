//! Pure strategy profiles and their enumeration
//!
//! A [`StrategyProfile`] keeps its flat results index up to date as single
//! strategies change, so lookups stay O(1). [`Contingencies`] walks profiles
//! in file order (player 0 fastest), optionally holding some players fixed.

use crate::game::NormalFormGame;

/// One strategy per player plus the cached flat index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyProfile {
    strategies: Vec<usize>,
    index: usize,
}

impl StrategyProfile {
    /// Every player on their first strategy.
    pub fn new(game: &NormalFormGame) -> Self {
        StrategyProfile {
            strategies: vec![0; game.num_players()],
            index: 0,
        }
    }

    pub fn from_strategies(game: &NormalFormGame, strategies: &[usize]) -> Self {
        StrategyProfile {
            strategies: strategies.to_vec(),
            index: game.flat_index(strategies),
        }
    }

    pub fn strategies(&self) -> &[usize] {
        &self.strategies
    }

    pub fn strategy(&self, player: usize) -> usize {
        self.strategies[player]
    }

    /// Flat results index (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_strategy(&mut self, game: &NormalFormGame, player: usize, strategy: usize) {
        let strategies = game.player(player).strategies();
        assert!(strategy < strategies.len(), "strategy {} out of range", strategy);
        self.index -= strategies[self.strategies[player]].index();
        self.index += strategies[strategy].index();
        self.strategies[player] = strategy;
    }
}

/// Odometer over pure profiles, player 0 varying fastest.
pub struct Contingencies<'g> {
    game: &'g NormalFormGame,
    current: StrategyProfile,
    frozen: Vec<bool>,
    done: bool,
}

impl<'g> Contingencies<'g> {
    /// Every profile of the game.
    pub fn new(game: &'g NormalFormGame) -> Self {
        Self::with_fixed(game, &[])
    }

    /// Profiles in which each `(player, strategy)` pair of `fixed` holds.
    pub fn with_fixed(game: &'g NormalFormGame, fixed: &[(usize, usize)]) -> Self {
        let mut current = StrategyProfile::new(game);
        let mut frozen = vec![false; game.num_players()];
        for &(player, strategy) in fixed {
            current.set_strategy(game, player, strategy);
            frozen[player] = true;
        }
        let done = game.dimensions().iter().any(|&d| d == 0);
        Contingencies { game, current, frozen, done }
    }
}

impl Iterator for Contingencies<'_> {
    type Item = StrategyProfile;

    fn next(&mut self) -> Option<StrategyProfile> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = true;
        for player in 0..self.game.num_players() {
            if self.frozen[player] {
                continue;
            }
            let next = self.current.strategy(player) + 1;
            if next < self.game.num_strats(player) {
                self.current.set_strategy(self.game, player, next);
                self.done = false;
                break;
            }
            self.current.set_strategy(self.game, player, 0);
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_matches_flat_order() {
        let game = NormalFormGame::new(&[2, 3, 2]);
        let indices: Vec<usize> = Contingencies::new(&game).map(|p| p.index()).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_fixed_players_are_held() {
        let game = NormalFormGame::new(&[2, 3, 2]);
        let profiles: Vec<_> = Contingencies::with_fixed(&game, &[(1, 2)]).collect();
        assert_eq!(profiles.len(), 4);
        assert!(profiles.iter().all(|p| p.strategy(1) == 2));
        assert_eq!(profiles[1].strategies(), &[1, 2, 0]);
    }

    #[test]
    fn test_all_fixed_yields_single_profile() {
        let game = NormalFormGame::new(&[2, 2]);
        let profiles: Vec<_> = Contingencies::with_fixed(&game, &[(0, 1), (1, 1)]).collect();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].index(), 3);
    }

    #[test]
    fn test_set_strategy_tracks_index() {
        let game = NormalFormGame::new(&[3, 4]);
        let mut profile = StrategyProfile::new(&game);
        profile.set_strategy(&game, 1, 3);
        profile.set_strategy(&game, 0, 2);
        assert_eq!(profile.index(), game.flat_index(&[2, 3]));
        profile.set_strategy(&game, 1, 1);
        assert_eq!(profile, StrategyProfile::from_strategies(&game, &[2, 1]));
    }

    #[test]
    fn test_player_without_strategies_has_no_profiles() {
        let game = NormalFormGame::new(&[2, 0]);
        assert_eq!(Contingencies::new(&game).count(), 0);
    }
}
