//! # duel-engine
//!
//! Rules engine for a two-player gem-trading card duel, built to be driven
//! by search agents and simulations.
//!
//! ## Design Principles
//!
//! 1. **Explicit Actions**: Every player choice, including the follow-up
//!    decisions card abilities open, is an `Action` applied through
//!    `Game::apply`.
//!
//! 2. **All-or-Nothing**: An illegal action returns an `IllegalAction` and
//!    leaves the game untouched.
//!
//! 3. **Deterministic**: One seed fixes deck order, bag draws and the first
//!    player. Forked games take independent bag streams.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cheap `Game` clones via `im-rs` and a
//!   shared catalog, for search branching.
//!
//! - **Single Privilege Rule**: Every privilege grant goes through one
//!   transfer routine on the board (pool first, then the opponent).
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `tokens`: Token kinds and counts, the grid, the bag
//! - `cards`: Card definitions, catalog, decks and the face-up pyramid
//! - `board`: Shared state and the privilege transfer rule
//! - `player`: Per-player holdings, payment, victory conditions
//! - `rules`: Actions, turn phases, deltas and the `RulesEngine` trait
//! - `game`: Setup, validation and resolution, turn flow, legal actions

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod player;
pub mod rules;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{GameRng, IllegalAction, PlayerId, PlayerPair, RulesConfig, RulesResult, Stream};

pub use crate::tokens::{Cell, Gem, Token, TokenCounts, TokenGrid};

pub use crate::cards::{Ability, CardCatalog, CardColor, CardDef, CardId, Level, RoyalCard, RoyalId};

pub use crate::board::{Board, PrivilegeGrant};

pub use crate::player::{PlayerState, Victory};

pub use crate::rules::{
    Action, ActionKind, ActionRecord, Continuation, GameEvent, GameResult, MandatorySet, Phase,
    ReserveSource, RulesEngine, StateDelta,
};

pub use crate::game::{new_game, Game, GameBuilder};
