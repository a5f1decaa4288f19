//! nashpath Builder - constructing games from outside data
//!
//! Games come from `.nfg` text, from explicit payoff tables, or from a
//! seeded random generator. Everything here hands back a plain
//! [`NormalFormGame`](nashpath_engine::NormalFormGame) with a clean dirty
//! flag.

pub mod error;
pub mod random;
pub mod reader;
pub mod table;

pub use error::ReadError;
pub use random::random_game;
pub use reader::{parse_nfg, read_nfg};
pub use table::from_payoffs;
