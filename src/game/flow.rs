//! Turn flow after an action resolves.
//!
//! ## Order
//!
//! 1. Open the next pending decision that has at least one answer; skip
//!    the others.
//! 2. Hand above the limit: open a discard.
//! 3. Victory check for the active player.
//! 4. End the turn (or start the extra turn) and check the next player
//!    for deadlock.

use super::Game;
use crate::core::PlayerId;
use crate::rules::{Continuation, GameEvent, GameResult, Pending, Phase};
use crate::tokens::Token;

impl Game {
    /// Continue after a mandatory action or a follow-up decision.
    pub(crate) fn advance(&mut self, events: &mut Vec<GameEvent>) -> Continuation {
        let player = self.turn.active;
        while let Some(decision) = self.turn.next_pending() {
            if self.decision_open(player, decision) {
                return self.enter(decision.phase());
            }
            log::trace!("{player} skips {decision:?}");
            events.push(GameEvent::DecisionSkipped { player, decision });
        }

        let excess = self.players[player].excess_tokens(self.config.token_limit);
        if excess > 0 {
            let excess = u8::try_from(excess).unwrap_or(u8::MAX);
            return self.enter(Phase::Discard { excess });
        }
        self.finish_turn(events)
    }

    /// Victory check, then hand the turn over.
    pub(crate) fn finish_turn(&mut self, events: &mut Vec<GameEvent>) -> Continuation {
        let player = self.turn.active;
        if let Some(victory) = self.players[player].victory(&self.config) {
            let result = GameResult::Winner { player, victory };
            self.status = Some(result);
            events.push(GameEvent::GameWon { player, victory });
            log::info!("{player} wins by {victory} on turn {}", self.turn.turn_number);
            return Continuation::GameOver(result);
        }

        let extra = self.turn.extra_turn;
        let next = self.turn.advance_turn();
        log::trace!("turn {} starts for {next}", self.turn.turn_number);
        if let Some(result) = self.check_deadlock(events) {
            return Continuation::GameOver(result);
        }
        if extra {
            Continuation::ExtraTurn { player: next }
        } else {
            Continuation::EndTurn { next }
        }
    }

    /// Continue after an optional action.
    pub(crate) fn after_optional(&mut self, events: &mut Vec<GameEvent>) -> Continuation {
        match self.check_deadlock(events) {
            Some(result) => Continuation::GameOver(result),
            None => Continuation::Continue {
                phase: Phase::StartOfRound,
            },
        }
    }

    fn enter(&mut self, phase: Phase) -> Continuation {
        log::trace!("{} enters {phase:?}", self.turn.active);
        self.turn.phase = phase;
        Continuation::Continue { phase }
    }

    /// Whether a queued decision has at least one answer.
    fn decision_open(&self, player: PlayerId, decision: Pending) -> bool {
        match decision {
            Pending::TakeMatchingToken(gem) => self.board.grid.first_of(Token::from(gem)).is_some(),
            Pending::StealToken => self.players[player.opponent()]
                .tokens
                .iter()
                .any(|(token, _)| !token.is_gold()),
            Pending::ChooseRoyal => !self.board.royals.is_empty(),
        }
    }

    /// Nothing mandatory and nothing to replenish with: the game cannot go on.
    fn check_deadlock(&mut self, events: &mut Vec<GameEvent>) -> Option<GameResult> {
        if self.turn.phase != Phase::StartOfRound
            || !self.board.bag.is_empty()
            || !self.available_mandatory_actions().is_empty()
        {
            return None;
        }
        let player = self.turn.active;
        self.status = Some(GameResult::Deadlock);
        events.push(GameEvent::Deadlocked { player });
        log::info!("deadlock on turn {}: {player} has no action", self.turn.turn_number);
        Some(GameResult::Deadlock)
    }
}
