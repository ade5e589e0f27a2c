//! Rules vocabulary: actions, turn phases, deltas and the engine trait.
//!
//! The validator, resolver and turn flow that give these types meaning
//! live on `Game` (see the `game` module).

pub mod action;
pub mod delta;
pub mod engine;
pub mod turn;

pub use action::{Action, ActionKind, ActionRecord, MandatorySet, ReserveSource};
pub use delta::{Continuation, GameEvent, StateDelta};
pub use engine::{GameResult, RulesEngine};
pub use turn::{Pending, Phase, TurnState};
