//! Tokens: kinds, the bag and the grid.
//!
//! The pool is closed. Every token sits in exactly one of the bag, the grid
//! or a player's hand for the whole game; nothing here creates or destroys
//! one.

pub mod bag;
pub mod grid;
pub mod token;

pub use bag::Bag;
pub use grid::{Cell, Line, TakenLine, TokenGrid, LINE_STEPS};
pub use token::{Gem, GemCounts, ParseTokenError, Token, TokenCounts};
