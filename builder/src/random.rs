//! Seeded random games

use crate::table::fill_profiles;
use nashpath_engine::NormalFormGame;
use num_bigint::BigInt;
use num_rational::BigRational;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Most decimal digits a random payoff can carry.
pub const MAX_DECIMALS: u32 = 18;

/// Game with one outcome per profile and payoffs drawn uniformly from
/// `[0, 1)` on a grid of `decimals` digits, so every payoff is an exact
/// decimal. The same seed always gives the same game.
pub fn random_game(dimensions: &[usize], seed: u64, decimals: u32) -> NormalFormGame {
    assert!(decimals <= MAX_DECIMALS, "at most {} decimals", MAX_DECIMALS);
    let scale = 10u64.pow(decimals);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut game = NormalFormGame::new(dimensions);
    game.set_title(format!("Random game (seed {})", seed));
    fill_profiles(&mut game, |_, _| {
        BigRational::new(BigInt::from(rng.random_range(0..scale)), BigInt::from(scale))
    });
    game.mark_clean();
    log::debug!("generated random game {:?} from seed {}", dimensions, seed);
    game
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_determines_game() {
        let a = random_game(&[3, 2], 7, 4);
        let b = random_game(&[3, 2], 7, 4);
        let c = random_game(&[3, 2], 8, 4);
        let payoffs = |g: &NormalFormGame| -> Vec<BigRational> {
            (0..g.num_profiles())
                .flat_map(|i| (0..2).map(move |pl| (i, pl)))
                .map(|(i, pl)| g.exact_payoff_at(i, pl))
                .collect()
        };
        assert_eq!(payoffs(&a), payoffs(&b));
        assert_ne!(payoffs(&a), payoffs(&c));
    }

    #[test]
    fn test_payoffs_on_decimal_grid() {
        let game = random_game(&[2, 2, 2], 1, 3);
        assert_eq!(game.num_outcomes(), 8);
        for outcome in game.outcomes() {
            for value in outcome.payoffs() {
                let scaled = value * BigRational::from_integer(BigInt::from(1000));
                assert!(scaled.is_integer());
                assert!(*value >= BigRational::from_integer(BigInt::from(0)));
                assert!(*value < BigRational::from_integer(BigInt::from(1)));
            }
        }
    }
}
