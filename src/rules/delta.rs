//! What an applied action changed.
//!
//! `StateDelta` is returned by every successful `Game::apply`. Its events
//! list each state change in the order it happened, and its continuation
//! says who acts next and in which phase.

use serde::{Deserialize, Serialize};

use super::action::ReserveSource;
use super::engine::GameResult;
use super::turn::{Pending, Phase};
use crate::board::PrivilegeGrant;
use crate::cards::{Ability, CardId, RoyalId};
use crate::core::PlayerId;
use crate::player::Victory;
use crate::tokens::{Cell, Gem, Token, TokenCounts};

/// A single state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PrivilegeUsed {
        player: PlayerId,
        cell: Cell,
        token: Token,
    },
    BoardReplenished {
        placed: usize,
    },
    PrivilegeGranted {
        player: PlayerId,
        grant: PrivilegeGrant,
    },
    TokensTaken {
        player: PlayerId,
        tokens: TokenCounts,
    },
    CardReserved {
        player: PlayerId,
        card: CardId,
        source: ReserveSource,
        gold: Cell,
    },
    /// A pyramid slot was refilled (`None`: the deck is exhausted).
    SlotRefilled {
        card: Option<CardId>,
    },
    CardPurchased {
        player: PlayerId,
        card: CardId,
        color: Option<Gem>,
        paid: TokenCounts,
    },
    ExtraTurnGranted {
        player: PlayerId,
    },
    MatchingTokenTaken {
        player: PlayerId,
        cell: Cell,
        token: Token,
    },
    TokenStolen {
        player: PlayerId,
        from: PlayerId,
        token: Token,
    },
    RoyalTaken {
        player: PlayerId,
        royal: RoyalId,
    },
    /// A decision with no possible answer (no matching token on the grid,
    /// nothing to steal, no royal left).
    DecisionSkipped {
        player: PlayerId,
        decision: Pending,
    },
    /// An ability with no effect where it was printed (a royal asking for a
    /// matching token, for instance).
    AbilityIgnored {
        player: PlayerId,
        ability: Ability,
    },
    TokensDiscarded {
        player: PlayerId,
        tokens: TokenCounts,
    },
    GameWon {
        player: PlayerId,
        victory: Victory,
    },
    Deadlocked {
        player: PlayerId,
    },
}

/// What happens after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continuation {
    /// Same player, same turn, now in `phase`.
    Continue { phase: Phase },
    /// The turn ended; `next` starts a new one.
    EndTurn { next: PlayerId },
    /// The turn ended; the same player starts another.
    ExtraTurn { player: PlayerId },
    /// No more actions.
    GameOver(GameResult),
}

/// Result of one applied action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDelta {
    /// Who acted.
    pub player: PlayerId,
    pub events: Vec<GameEvent>,
    pub continuation: Continuation,
}

impl StateDelta {
    /// True if the action ended the turn (including by ending the game).
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        !matches!(self.continuation, Continuation::Continue { .. })
    }

    /// Net tokens `player` gained through taking, matching and stealing.
    #[must_use]
    pub fn tokens_gained(&self, player: PlayerId) -> TokenCounts {
        let mut gained = TokenCounts::default();
        for event in &self.events {
            match *event {
                GameEvent::TokensTaken { player: p, tokens } if p == player => {
                    gained.add_all(&tokens);
                }
                GameEvent::PrivilegeUsed { player: p, token, .. }
                | GameEvent::MatchingTokenTaken { player: p, token, .. }
                | GameEvent::TokenStolen { player: p, token, .. }
                    if p == player =>
                {
                    gained.add(token, 1);
                }
                _ => {}
            }
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_turn() {
        let mut delta = StateDelta {
            player: PlayerId::FIRST,
            events: Vec::new(),
            continuation: Continuation::Continue {
                phase: Phase::StartOfRound,
            },
        };
        assert!(!delta.ends_turn());

        delta.continuation = Continuation::EndTurn {
            next: PlayerId::SECOND,
        };
        assert!(delta.ends_turn());
    }

    #[test]
    fn test_tokens_gained() {
        let delta = StateDelta {
            player: PlayerId::FIRST,
            events: vec![
                GameEvent::TokensTaken {
                    player: PlayerId::FIRST,
                    tokens: TokenCounts::from_array([1, 1, 0, 0, 0, 0, 0]),
                },
                GameEvent::TokenStolen {
                    player: PlayerId::FIRST,
                    from: PlayerId::SECOND,
                    token: Token::Pearl,
                },
                GameEvent::PrivilegeGranted {
                    player: PlayerId::SECOND,
                    grant: PrivilegeGrant::FromPool,
                },
            ],
            continuation: Continuation::EndTurn {
                next: PlayerId::SECOND,
            },
        };
        assert_eq!(
            delta.tokens_gained(PlayerId::FIRST),
            TokenCounts::from_array([1, 1, 0, 0, 0, 1, 0])
        );
        assert!(delta.tokens_gained(PlayerId::SECOND).is_empty());
    }
}
