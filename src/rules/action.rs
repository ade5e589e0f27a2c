//! Action representation.
//!
//! An `Action` carries the minimal payload to apply it: cells for token
//! picks, a card id or a deck level for reservations, a card id (and copied
//! colour for jokers) for purchases. Follow-up decisions created by card
//! abilities, royals and the hand limit are actions too, so every choice a
//! player makes goes through `Game::apply` and shows up in the history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Level, RoyalId};
use crate::core::PlayerId;
use crate::tokens::{Cell, Gem, Line, Token, TokenCounts};

/// What a reservation takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReserveSource {
    /// A face-up card.
    Pyramid(CardId),
    /// The top card of a deck, unseen.
    Deck(Level),
}

/// A complete player action.
///
/// ## Example
///
/// ```
/// use duel_engine::rules::{Action, ActionKind};
/// use duel_engine::tokens::Cell;
///
/// let take = Action::take_tokens(&[Cell::new(0, 0), Cell::new(0, 1)]);
/// assert_eq!(take.kind(), ActionKind::TakeTokens);
/// assert!(take.is_mandatory());
/// assert!(!Action::ReplenishBoard.is_mandatory());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Spend a privilege for one non-gold token. Optional, repeatable.
    UsePrivilege { cell: Cell },
    /// Refill the grid from the bag; the opponent gains a privilege.
    ReplenishBoard,
    /// Take a line of one to three non-gold tokens.
    TakeTokens { cells: Line },
    /// Take a gold token and reserve a card.
    TakeGoldAndReserve { gold: Cell, source: ReserveSource },
    /// Buy a face-up or reserved card. `bonus` is the colour a joker copies.
    PurchaseCard { card: CardId, bonus: Option<Gem> },
    /// Pick the grid token granted by a take-matching-token ability.
    TakeMatchingToken { cell: Cell },
    /// Pick the kind of token to steal from the opponent.
    StealToken { token: Token },
    /// Pick a royal card after reaching a crown milestone.
    ChooseRoyal { royal: RoyalId },
    /// Return tokens to the bag to get back down to the hand limit.
    DiscardTokens { tokens: TokenCounts },
}

impl Action {
    /// Token-line action from cells in any order.
    #[must_use]
    pub fn take_tokens(cells: &[Cell]) -> Self {
        Action::TakeTokens {
            cells: SmallVec::from_slice(cells),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::UsePrivilege { .. } => ActionKind::UsePrivilege,
            Action::ReplenishBoard => ActionKind::ReplenishBoard,
            Action::TakeTokens { .. } => ActionKind::TakeTokens,
            Action::TakeGoldAndReserve { .. } => ActionKind::TakeGoldAndReserve,
            Action::PurchaseCard { .. } => ActionKind::PurchaseCard,
            Action::TakeMatchingToken { .. } => ActionKind::TakeMatchingToken,
            Action::StealToken { .. } => ActionKind::StealToken,
            Action::ChooseRoyal { .. } => ActionKind::ChooseRoyal,
            Action::DiscardTokens { .. } => ActionKind::DiscardTokens,
        }
    }

    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.kind().is_mandatory()
    }
}

/// Category tag of an `Action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    UsePrivilege,
    ReplenishBoard,
    TakeTokens,
    TakeGoldAndReserve,
    PurchaseCard,
    TakeMatchingToken,
    StealToken,
    ChooseRoyal,
    DiscardTokens,
}

impl ActionKind {
    /// Exactly one of these ends the start of a round.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(
            self,
            ActionKind::TakeTokens | ActionKind::TakeGoldAndReserve | ActionKind::PurchaseCard
        )
    }

    /// Allowed any number of times before the mandatory action.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, ActionKind::UsePrivilege | ActionKind::ReplenishBoard)
    }

    /// Answers a decision opened by the mandatory action.
    #[must_use]
    pub const fn is_follow_up(self) -> bool {
        !self.is_mandatory() && !self.is_optional()
    }
}

/// Mandatory action categories currently available to the active player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MandatorySet {
    pub take_tokens: bool,
    pub take_gold_and_reserve: bool,
    pub purchase_card: bool,
}

impl MandatorySet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.take_tokens || self.take_gold_and_reserve || self.purchase_card)
    }

    #[must_use]
    pub fn contains(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::TakeTokens => self.take_tokens,
            ActionKind::TakeGoldAndReserve => self.take_gold_and_reserve,
            ActionKind::PurchaseCard => self.purchase_card,
            _ => false,
        }
    }

    /// The available kinds, in declaration order.
    #[must_use]
    pub fn kinds(&self) -> SmallVec<[ActionKind; 3]> {
        [
            ActionKind::TakeTokens,
            ActionKind::TakeGoldAndReserve,
            ActionKind::PurchaseCard,
        ]
        .into_iter()
        .filter(|&k| self.contains(k))
        .collect()
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Position in the whole game's action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
