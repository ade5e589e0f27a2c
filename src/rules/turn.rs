//! Turn state machine data.
//!
//! ## Phases
//!
//! ```text
//! StartOfRound --optional--> StartOfRound
//!      |
//!  mandatory
//!      v
//! pending decisions (TakeMatchingToken / StealToken / ChooseRoyal)
//!      v
//! Discard (only above the hand limit)
//!      v
//! victory check --> game over
//!      v
//! StartOfRound for the opponent, or for the same player on an extra turn
//! ```
//!
//! Who moves next lives here and is reported back through
//! `Continuation`, never anywhere else.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionKind;
use crate::core::PlayerId;
use crate::tokens::Gem;

/// What the active player must do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Optional actions, then one mandatory action.
    StartOfRound,
    /// Pick a grid token of this colour.
    TakeMatchingToken { color: Gem },
    /// Pick a token kind to take from the opponent.
    StealToken,
    /// Pick a royal card.
    ChooseRoyal,
    /// Return this many tokens to the bag.
    Discard { excess: u8 },
}

impl Phase {
    /// Whether an action of `kind` can be applied in this phase.
    #[must_use]
    pub fn accepts(self, kind: ActionKind) -> bool {
        match self {
            Phase::StartOfRound => kind.is_optional() || kind.is_mandatory(),
            Phase::TakeMatchingToken { .. } => kind == ActionKind::TakeMatchingToken,
            Phase::StealToken => kind == ActionKind::StealToken,
            Phase::ChooseRoyal => kind == ActionKind::ChooseRoyal,
            Phase::Discard { .. } => kind == ActionKind::DiscardTokens,
        }
    }
}

/// A decision queued by the mandatory action, opened once the ones before
/// it are resolved. Decisions with no possible answer are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pending {
    TakeMatchingToken(Gem),
    StealToken,
    ChooseRoyal,
}

impl Pending {
    /// The phase that asks for this decision.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            Pending::TakeMatchingToken(color) => Phase::TakeMatchingToken { color },
            Pending::StealToken => Phase::StealToken,
            Pending::ChooseRoyal => Phase::ChooseRoyal,
        }
    }
}

/// Whose turn it is and how far it has got.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    pub(crate) active: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) turn_number: u32,
    pub(crate) sequence: u32,
    pub(crate) extra_turn: bool,
    pub(crate) pending: SmallVec<[Pending; 4]>,
}

impl TurnState {
    /// Turn 1 for `first`.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            active: first,
            phase: Phase::StartOfRound,
            turn_number: 1,
            sequence: 0,
            extra_turn: false,
            pending: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Actions applied so far in the whole game.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Whether the current turn will be followed by another for the same player.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        self.extra_turn
    }

    /// Decisions still to be opened this turn.
    #[must_use]
    pub fn pending(&self) -> &[Pending] {
        &self.pending
    }

    /// Queue a decision after the ones already waiting.
    pub(crate) fn queue(&mut self, decision: Pending) {
        self.pending.push(decision);
    }

    /// Queue a decision ahead of the ones already waiting.
    pub(crate) fn queue_next(&mut self, decision: Pending) {
        self.pending.insert(0, decision);
    }

    pub(crate) fn next_pending(&mut self) -> Option<Pending> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Start the next turn. Returns the player to move.
    pub(crate) fn advance_turn(&mut self) -> PlayerId {
        if !self.extra_turn {
            self.active = self.active.opponent();
        }
        self.phase = Phase::StartOfRound;
        self.turn_number += 1;
        self.extra_turn = false;
        self.pending.clear();
        self.active
    }
}
