//! Rule violations.
//!
//! Every rejected action maps to exactly one `IllegalAction` variant and
//! leaves the game untouched. Outcomes the rules define as "nothing happens"
//! (no matching token to take, nothing to steal, empty royal pool, exhausted
//! deck) are not errors and never show up here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum IllegalAction {
    /// Selected cells are not one to three contiguous cells on one axis.
    #[error("selected cells do not form a contiguous straight line of one to three tokens")]
    NotAdjacentLine,

    /// A token selection contains gold.
    #[error("gold can only be taken together with a reservation")]
    IncludesGold,

    /// The player already holds the maximum number of reserved cards.
    #[error("reserve limit reached")]
    ReserveLimitReached,

    /// No gold token is on the board.
    #[error("no gold token on the board")]
    NoGoldOnBoard,

    /// Tokens plus gold do not cover the cost after bonuses.
    #[error("not enough tokens to pay for the card")]
    InsufficientFunds,

    /// The referenced card, cell, token, royal or privilege is not there.
    #[error("not owned or not available")]
    NotOwnedOrAvailable,

    /// Replenishing needs at least one token in the bag.
    #[error("the bag is empty")]
    BagEmpty,

    /// Neither the pool nor the other player can give up a privilege.
    #[error("neither the privilege pool nor the opponent holds a privilege")]
    PrivilegePoolAndOpponentEmpty,

    /// A joker needs a bonus colour the player already owns.
    #[error("a joker card needs an owned bonus colour to copy")]
    NoBonusToCopy,

    /// The action category is not accepted in the current phase of the turn.
    #[error("action not allowed in the current phase")]
    WrongPhase,

    /// A discard must bring the player back to exactly the token limit.
    #[error("discard must leave exactly the token limit")]
    InvalidDiscard,

    /// The game has ended (victory or deadlock).
    #[error("the game is over")]
    GameOver,
}

/// Result alias used by every validating operation.
pub type RulesResult<T> = Result<T, IllegalAction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_lowercase_sentences() {
        assert_eq!(IllegalAction::BagEmpty.to_string(), "the bag is empty");
        assert_eq!(
            IllegalAction::ReserveLimitReached.to_string(),
            "reserve limit reached"
        );
    }

    #[test]
    fn test_error_serde() {
        let json = serde_json::to_string(&IllegalAction::InsufficientFunds).unwrap();
        let back: IllegalAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IllegalAction::InsufficientFunds);
    }
}
