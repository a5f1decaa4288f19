//! Outcome records shared by many strategy-profile cells
//!
//! Outcomes live in an arena owned by the game. Result cells point into the
//! arena by position; callers hold an [`OutcomeHandle`], which carries a
//! stable identity so that a handle to a deleted outcome resolves to nothing
//! instead of silently aliasing the outcome that moved into its slot.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of an outcome, stable across renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeHandle(u64);

impl OutcomeHandle {
    pub(crate) fn fresh() -> Self {
        OutcomeHandle(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// A labelled payoff vector, one exact value per player plus an `f64` mirror.
#[derive(Debug, Clone)]
pub struct Outcome {
    handle: OutcomeHandle,
    /// 1-based position in the game's outcome sequence
    id: usize,
    label: String,
    payoffs: Vec<BigRational>,
    mirror: Vec<f64>,
}

impl Outcome {
    pub(crate) fn new(id: usize, num_players: usize) -> Self {
        Outcome {
            handle: OutcomeHandle::fresh(),
            id,
            label: String::new(),
            payoffs: vec![BigRational::zero(); num_players],
            mirror: vec![0.0; num_players],
        }
    }

    pub fn handle(&self) -> OutcomeHandle {
        self.handle
    }

    /// 1-based id; always equal to the outcome's position in the game.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Exact payoff to `player` (0-based).
    pub fn payoff(&self, player: usize) -> &BigRational {
        &self.payoffs[player]
    }

    /// Cached floating-point payoff to `player`.
    pub fn payoff_f64(&self, player: usize) -> f64 {
        self.mirror[player]
    }

    pub fn payoffs(&self) -> &[BigRational] {
        &self.payoffs
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_payoff(&mut self, player: usize, value: BigRational) {
        self.mirror[player] = to_f64(&value);
        self.payoffs[player] = value;
    }

    /// Recompute every mirrored value from the exact payoffs.
    pub(crate) fn refresh_mirror(&mut self) {
        for (slot, exact) in self.mirror.iter_mut().zip(self.payoffs.iter()) {
            *slot = to_f64(exact);
        }
    }
}

/// Integer payoff as an exact rational.
pub fn integer(value: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(value))
}

/// `numer / denom` as an exact rational. Panics on a zero denominator.
pub fn ratio(numer: i64, denom: i64) -> BigRational {
    assert!(denom != 0, "payoff denominator must be non-zero");
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Nearest `f64` to an exact payoff.
pub fn to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        let numer = value.numer().to_f64().unwrap_or(f64::NAN);
        let denom = value.denom().to_f64().unwrap_or(f64::NAN);
        numer / denom
    })
}
