//! Core engine types: players, RNG, rule configuration, rule violations.
//!
//! Everything here is independent of the board and the cards. Rule constants
//! live in `RulesConfig` rather than being scattered through the resolver.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::RulesConfig;
pub use error::{IllegalAction, RulesResult};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState, Stream};
