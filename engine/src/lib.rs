//! nashpath Engine - normal form games and the Yamamoto continuation
//!
//! This crate holds the game model (players, strategies, an outcome arena
//! and the profile-to-outcome table), mixed profiles, payoff-rank
//! partitions, and the path-following solver that walks from the uniform
//! profile to an approximate proper equilibrium. It also writes games in
//! the `.nfg` text format.
//!
//! The engine has no I/O beyond `std::io::Write` and no UI dependencies;
//! progress and cancellation go through [`StatusSink`].

pub mod config;
pub mod error;
pub mod fixtures;
pub mod game;
pub mod mixed;
pub mod nfg_file;
pub mod outcome;
pub mod partition;
pub mod profile;
pub mod status;
pub mod yamamoto;

pub use config::YamamotoConfig;
pub use error::SolveError;
pub use game::{NormalFormGame, Player, Strategy};
pub use mixed::MixedProfile;
pub use nfg_file::{to_nfg_string, NfgWriter};
pub use outcome::{Outcome, OutcomeHandle};
pub use profile::{Contingencies, StrategyProfile};
pub use status::{Cancelled, NullStatus, StatusSink};
pub use yamamoto::{yamamoto, Termination, YamamotoReport, YamamotoSolver};
