//! Board: everything the two players share.
//!
//! The board performs no rule decisions of its own beyond the privilege
//! transfer rule; the resolver decides when to call it.

pub mod privilege;
pub mod state;

pub use privilege::{PrivilegeGrant, PrivilegeSource};
pub use state::Board;
