//! The rules-engine seam agents and search code drive.
//!
//! `RulesEngine` is the whole surface an agent needs: who moves, what they
//! may do, apply it, and whether the game is over. The engine must be
//! deterministic given its seed so that search can replay branches.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::delta::StateDelta;
use crate::core::{PlayerId, RulesResult};
use crate::player::Victory;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner { player: PlayerId, victory: Victory },
    /// The player to move had no legal action: nothing mandatory was
    /// available and the bag was empty.
    Deadlock,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match *self {
            GameResult::Winner { player, .. } => Some(player),
            GameResult::Deadlock => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty exactly when `is_terminal` is `Some`
/// - `apply_action`: all-or-nothing; an error leaves the state untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// The player who must act.
    fn active_player(&self) -> PlayerId;

    /// Every action the active player may take now.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action for the active player.
    fn apply_action(&mut self, action: &Action) -> RulesResult<StateDelta>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check an action against the legal set.
    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Gem;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner {
            player: PlayerId::SECOND,
            victory: Victory::Color(Gem::Red),
        };
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));

        let deadlock = GameResult::Deadlock;
        assert!(!deadlock.is_winner(PlayerId::FIRST));
        assert_eq!(deadlock.winner(), None);
    }
}
