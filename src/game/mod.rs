//! The game: setup, action resolution, turn flow and legal actions.
//!
//! ## Applying actions
//!
//! ```
//! use duel_engine::game::new_game;
//! use duel_engine::rules::Continuation;
//!
//! let mut game = new_game(7);
//! let player = game.active_player();
//! let action = game.legal_actions().into_iter().find(|a| a.is_mandatory()).unwrap();
//!
//! let delta = game.apply(&action).unwrap();
//! assert_eq!(delta.player, player);
//! assert!(!matches!(delta.continuation, Continuation::GameOver(_)));
//! ```

mod flow;
mod legal;
mod resolver;
mod setup;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use setup::{new_game, GameBuilder};
pub use state::Game;
