//! Games from payoff tables

use crate::error::ReadError;
use nashpath_engine::NormalFormGame;
use num_rational::BigRational;

/// Give every profile, in enumeration order, a fresh outcome whose payoff
/// to player `pl` is `payoff(index, pl)`.
pub(crate) fn fill_profiles<F>(game: &mut NormalFormGame, mut payoff: F)
where
    F: FnMut(usize, usize) -> BigRational,
{
    for index in 0..game.num_profiles() {
        let handle = game.new_outcome();
        for pl in 0..game.num_players() {
            game.set_payoff(handle, pl, payoff(index, pl));
        }
        game.set_outcome_at(index, Some(handle));
    }
}

/// Build a game from one payoff row per profile, rows in enumeration order
/// (player 1 fastest) and one entry per player in each row.
pub fn from_payoffs(dimensions: &[usize], rows: &[Vec<BigRational>]) -> Result<NormalFormGame, ReadError> {
    let mut game = NormalFormGame::new(dimensions);
    if rows.len() != game.num_profiles() {
        return Err(ReadError::Shape {
            expected: game.num_profiles(),
            found: rows.len(),
        });
    }
    if let Some(row) = rows.iter().find(|row| row.len() != dimensions.len()) {
        return Err(ReadError::Shape {
            expected: dimensions.len(),
            found: row.len(),
        });
    }
    fill_profiles(&mut game, |index, pl| rows[index][pl].clone());
    game.mark_clean();
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nashpath_engine::outcome::integer;

    fn rows(values: &[[i64; 2]]) -> Vec<Vec<BigRational>> {
        values.iter().map(|r| r.iter().map(|&v| integer(v)).collect()).collect()
    }

    #[test]
    fn test_rows_follow_enumeration_order() {
        let game = from_payoffs(&[2, 2], &rows(&[[3, 3], [5, 0], [0, 5], [1, 1]])).unwrap();
        assert_eq!(game.num_outcomes(), 4);
        assert_eq!(game.payoff_at(game.flat_index(&[1, 0]), 0), 5.0);
        assert_eq!(game.payoff_at(game.flat_index(&[0, 1]), 1), 5.0);
        assert_eq!(game.outcome_id_at(3), 4);
    }

    #[test]
    fn test_shape_is_checked() {
        assert!(matches!(
            from_payoffs(&[2, 2], &rows(&[[1, 1]])),
            Err(ReadError::Shape { expected: 4, found: 1 })
        ));
        let ragged = vec![vec![integer(1)]];
        assert!(matches!(
            from_payoffs(&[1, 1], &ragged),
            Err(ReadError::Shape { expected: 2, found: 1 })
        ));
    }
}
