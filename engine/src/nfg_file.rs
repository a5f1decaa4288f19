//! `.nfg` serialization
//!
//! Writes the outcome-block form of the Gambit normal form format:
//!
//! ```text
//! NFG 1 R "title" { "Player 1" "Player 2" }
//!
//! { { "C" "D" }
//! { "C" "D" }
//! }
//! "comment"
//!
//! {
//! { "11" 3, 3 }
//! ...
//! }
//! 1 2 3 4
//! ```
//!
//! The trailing line lists the outcome id of every profile in enumeration
//! order, player 1 fastest, with `0` for an empty cell.

use crate::game::NormalFormGame;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use std::io::{self, Write};

/// Decimal places used when no precision is set.
pub const DEFAULT_PRECISION: usize = 6;

/// `\` and `"` gain a backslash.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Exact rendering of a payoff: an integer, a decimal of at most
/// `decimals` places, or `p/q`.
pub fn format_payoff(value: &BigRational, decimals: usize) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }
    let scale = num_traits::pow(BigInt::from(10), decimals);
    let scaled = value.clone() * BigRational::from_integer(scale.clone());
    if !scaled.is_integer() {
        return format!("{}/{}", value.numer(), value.denom());
    }
    let digits = scaled.numer().abs();
    let whole = &digits / &scale;
    let fraction = format!("{:0>width$}", (&digits % &scale).to_string(), width = decimals);
    let sign = if value.is_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
}

/// Writer holding an output precision, in decimal places, that each
/// `write_game` call overrides for its duration.
pub struct NfgWriter<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> NfgWriter<W> {
    pub fn new(out: W) -> Self {
        NfgWriter {
            out,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, decimals: usize) {
        self.precision = decimals;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `game` with payoffs at `decimals` places. The previous
    /// precision is restored whether or not the write succeeds; the game is
    /// marked clean only on success.
    pub fn write_game(&mut self, game: &NormalFormGame, decimals: usize) -> io::Result<()> {
        let saved = std::mem::replace(&mut self.precision, decimals);
        let result = self.emit(game);
        self.precision = saved;
        result?;
        game.mark_clean();
        log::debug!(
            "wrote game \"{}\" ({} outcomes, {} profiles)",
            game.title(),
            game.num_outcomes(),
            game.num_profiles()
        );
        Ok(())
    }

    fn emit(&mut self, game: &NormalFormGame) -> io::Result<()> {
        write!(self.out, "NFG 1 R \"{}\" {{ ", escape(game.title()))?;
        for player in game.players() {
            write!(self.out, "\"{}\" ", escape(player.name()))?;
        }
        write!(self.out, "}}\n\n{{ ")?;

        for player in game.players() {
            write!(self.out, "{{ ")?;
            for strategy in player.strategies() {
                write!(self.out, "\"{}\" ", escape(strategy.name()))?;
            }
            writeln!(self.out, "}}")?;
        }
        writeln!(self.out, "}}")?;
        write!(self.out, "\"{}\"\n\n", escape(game.comment()))?;

        writeln!(self.out, "{{")?;
        for outcome in game.outcomes() {
            let payoffs: Vec<String> = outcome
                .payoffs()
                .iter()
                .map(|v| format_payoff(v, self.precision))
                .collect();
            writeln!(self.out, "{{ \"{}\" {} }}", escape(outcome.label()), payoffs.join(", "))?;
        }
        writeln!(self.out, "}}")?;

        for index in 0..game.num_profiles() {
            write!(self.out, "{} ", game.outcome_id_at(index))?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Render `game` to a string.
pub fn to_nfg_string(game: &NormalFormGame, decimals: usize) -> String {
    let mut writer = NfgWriter::new(Vec::new());
    match writer.write_game(game, decimals) {
        Ok(()) => String::from_utf8_lossy(&writer.into_inner()).into_owned(),
        Err(_) => unreachable!("writing to a Vec cannot fail"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::prisoners_dilemma;
    use crate::outcome::{integer, ratio};

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prisoners_dilemma_layout() {
        let game = prisoners_dilemma();
        let text = to_nfg_string(&game, 2);
        let expected = "NFG 1 R \"Prisoner's Dilemma\" { \"1\" \"2\" }\n\n\
                        { { \"C\" \"D\" }\n{ \"C\" \"D\" }\n}\n\"\"\n\n\
                        {\n{ \"11\" 3, 3 }\n{ \"12\" 0, 5 }\n{ \"21\" 5, 0 }\n{ \"22\" 1, 1 }\n}\n\
                        1 3 2 4 \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_cells_write_zero() {
        let mut game = NormalFormGame::new(&[2, 1]);
        let o = game.new_outcome();
        game.set_outcome(&[1, 0], Some(o));
        let text = to_nfg_string(&game, 2);
        assert!(text.ends_with("}\n0 1 \n"));
        assert!(text.contains("{ \"\" 0, 0 }\n"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
        let mut game = NormalFormGame::new(&[1]);
        game.set_title("a\"b");
        assert!(to_nfg_string(&game, 0).starts_with("NFG 1 R \"a\\\"b\" { \"1\" }"));
    }

    #[test]
    fn test_payoff_formatting() {
        assert_eq!(format_payoff(&integer(-7), 3), "-7");
        assert_eq!(format_payoff(&ratio(1, 4), 3), "0.25");
        assert_eq!(format_payoff(&ratio(-5, 4), 2), "-1.25");
        assert_eq!(format_payoff(&ratio(1, 40), 2), "1/40");
        assert_eq!(format_payoff(&ratio(1, 3), 6), "1/3");
    }

    #[test]
    fn test_precision_restored_after_failure() {
        let game = prisoners_dilemma();
        let mut writer = NfgWriter::new(Broken);
        writer.set_precision(4);
        assert!(writer.write_game(&game, 9).is_err());
        assert_eq!(writer.precision(), 4);
        assert!(game.is_dirty());
    }

    #[test]
    fn test_success_clears_dirty_and_restores_precision() {
        let game = prisoners_dilemma();
        assert!(game.is_dirty());
        let mut writer = NfgWriter::new(Vec::new());
        writer.write_game(&game, 1).unwrap();
        assert_eq!(writer.precision(), DEFAULT_PRECISION);
        assert!(!game.is_dirty());
    }
}
