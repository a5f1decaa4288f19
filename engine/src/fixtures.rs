//! Small hand-built games shared by tests and benches
//!
//! Every game gives each profile its own outcome, labelled after the
//! profile, with integer payoffs. Strategies are listed per profile in
//! player order.

use crate::game::NormalFormGame;
use crate::outcome::integer;

/// One outcome per listed profile.
fn table(dimensions: &[usize], cells: &[(&[usize], &[i64])]) -> NormalFormGame {
    let mut game = NormalFormGame::new(dimensions);
    for &(strategies, payoffs) in cells {
        let handle = game.new_outcome();
        let label: Vec<String> = strategies.iter().map(|st| (st + 1).to_string()).collect();
        game.set_label(handle, label.join(""));
        for (pl, &value) in payoffs.iter().enumerate() {
            game.set_payoff(handle, pl, integer(value));
        }
        game.set_outcome(strategies, Some(handle));
    }
    game
}

/// Cooperate (0) or defect (1); defecting is strictly dominant.
pub fn prisoners_dilemma() -> NormalFormGame {
    let mut game = table(
        &[2, 2],
        &[
            (&[0, 0], &[3, 3]),
            (&[0, 1], &[0, 5]),
            (&[1, 0], &[5, 0]),
            (&[1, 1], &[1, 1]),
        ],
    );
    game.set_title("Prisoner's Dilemma");
    for pl in 0..2 {
        game.set_strategy_name(pl, 0, "C");
        game.set_strategy_name(pl, 1, "D");
    }
    game
}

/// Zero-sum pennies; every strategy is worth 0 at the centroid.
pub fn matching_pennies() -> NormalFormGame {
    table(
        &[2, 2],
        &[
            (&[0, 0], &[1, -1]),
            (&[0, 1], &[-1, 1]),
            (&[1, 0], &[-1, 1]),
            (&[1, 1], &[1, -1]),
        ],
    )
}

/// Player 0's two strategies pay the same against everything.
pub fn duplicate_strategy() -> NormalFormGame {
    table(
        &[2, 2],
        &[
            (&[0, 0], &[1, 2]),
            (&[0, 1], &[1, 0]),
            (&[1, 0], &[1, 2]),
            (&[1, 1], &[1, 0]),
        ],
    )
}

/// Player 1 always prefers strategy 1. Player 0 prefers strategy 0 at the
/// centroid, but strategy 1 once player 1 commits, so the ranking of
/// player 0 has to be reversed along the path.
pub fn rank_reversal() -> NormalFormGame {
    table(
        &[2, 2],
        &[
            (&[0, 0], &[10, 0]),
            (&[0, 1], &[0, 1]),
            (&[1, 0], &[0, 0]),
            (&[1, 1], &[1, 1]),
        ],
    )
}

/// Two players whose only equilibrium is fully mixed: player 0 plays
/// (1/4, 3/4) and player 1 plays (1/3, 2/3).
pub fn crossed_preferences() -> NormalFormGame {
    table(
        &[2, 2],
        &[
            (&[0, 0], &[2, 0]),
            (&[1, 0], &[0, 1]),
            (&[0, 1], &[0, 3]),
            (&[1, 1], &[1, 0]),
        ],
    )
}

/// Three players, two strategies each; a player scores 1 when siding with
/// the majority.
pub fn three_player_majority() -> NormalFormGame {
    let profiles: Vec<[usize; 3]> = (0..8).map(|i| [i & 1, (i >> 1) & 1, (i >> 2) & 1]).collect();
    let payoffs: Vec<[i64; 3]> = profiles
        .iter()
        .map(|p| {
            let majority = usize::from(p.iter().sum::<usize>() >= 2);
            [0, 1, 2].map(|pl| i64::from(p[pl] == majority))
        })
        .collect();
    let cells: Vec<(&[usize], &[i64])> = profiles
        .iter()
        .zip(&payoffs)
        .map(|(p, v)| (&p[..], &v[..]))
        .collect();
    table(&[2, 2, 2], &cells)
}

/// Two players with one strategy each.
pub fn single_strategy() -> NormalFormGame {
    table(&[1, 1], &[(&[0, 0], &[1, 1])])
}
