//! Privilege scrolls.
//!
//! There are exactly `privilege_total` scrolls, held by the pool or by one
//! of the players. Every rule that hands one out goes through
//! `Board::grant_privilege`:
//!
//! 1. the pool has one: the pool pays;
//! 2. otherwise the other player has one: it moves across;
//! 3. otherwise the recipient already holds them all: nothing happens.

use serde::{Deserialize, Serialize};

use super::Board;
use crate::core::{IllegalAction, RulesResult};
use crate::player::PlayerState;

/// Where a transferred privilege came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegeSource {
    Pool,
    Opponent,
}

/// Outcome of a privilege grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegeGrant {
    FromPool,
    FromOpponent,
    /// The recipient already held every privilege.
    Unchanged,
}

impl Board {
    /// Move one privilege to `to`, from the pool if possible, else from
    /// `other`. Fails when neither has one.
    pub fn take_privilege_from(
        &mut self,
        to: &mut PlayerState,
        other: &mut PlayerState,
    ) -> RulesResult<PrivilegeSource> {
        if self.privileges > 0 {
            self.privileges -= 1;
            to.privileges += 1;
            Ok(PrivilegeSource::Pool)
        } else if other.privileges > 0 {
            other.privileges -= 1;
            to.privileges += 1;
            Ok(PrivilegeSource::Opponent)
        } else {
            Err(IllegalAction::PrivilegePoolAndOpponentEmpty)
        }
    }

    /// The single privilege transfer rule used by every trigger.
    pub fn grant_privilege(&mut self, to: &mut PlayerState, other: &mut PlayerState) -> PrivilegeGrant {
        let grant = match self.take_privilege_from(to, other) {
            Ok(PrivilegeSource::Pool) => PrivilegeGrant::FromPool,
            Ok(PrivilegeSource::Opponent) => PrivilegeGrant::FromOpponent,
            Err(_) => PrivilegeGrant::Unchanged,
        };
        log::trace!(
            "privilege grant {grant:?}: pool {}, recipient {}, other {}",
            self.privileges,
            to.privileges,
            other.privileges
        );
        grant
    }

    /// A spent privilege goes back above the board.
    pub fn return_privilege(&mut self, from: &mut PlayerState) -> RulesResult<()> {
        if from.privileges == 0 {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }
        from.privileges -= 1;
        self.privileges += 1;
        Ok(())
    }
}
