//! Player holdings and the payment rules.

pub mod payment;
pub mod state;

pub use state::{OwnedCard, PlayerState, Victory};
