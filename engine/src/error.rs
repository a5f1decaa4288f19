//! Error types for the continuation solver
//!
//! Index and profile-length violations are caller bugs and panic instead of
//! showing up here. What remains are the numerical dead ends of the path
//! follower, which callers can match on and report.

use thiserror::Error;

/// Why a continuation run could not produce an equilibrium.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Two strategies of one player earn the same payoff against the
    /// uniform starting profile, so the initial rank order is not strict.
    #[error("player {player}: strategies {first} and {second} tie at {value} in the initial ranking")]
    TiedPayoffs {
        player: usize,
        first: usize,
        second: usize,
        value: f64,
    },
    /// Every cofactor of the Jacobian vanished (or overflowed), so no
    /// predictor direction exists.
    #[error("degenerate Jacobian at step {step} (lambda = {lambda})")]
    Degenerate { step: usize, lambda: f64 },
    /// A step carried lambda above 1 or a probability below 0 by more than
    /// the feasibility tolerance.
    #[error("path left the feasible region at step {step} (lambda = {lambda}, lowest probability = {probability})")]
    Infeasible {
        step: usize,
        lambda: f64,
        probability: f64,
    },
    /// The game has a player without strategies.
    #[error("player {player} has no strategies")]
    EmptyPlayer { player: usize },
    #[error("game has no players")]
    NoPlayers,
}
