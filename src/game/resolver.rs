//! Validating and resolving actions.
//!
//! `Game::apply` is all-or-nothing: the action resolves on a staged copy
//! of the game that replaces the live one only when every step succeeded.
//! Each handler checks its preconditions in a fixed order so the reported
//! `IllegalAction` is deterministic.

use super::Game;
use crate::cards::{Ability, CardDef, CardId, RoyalId};
use crate::core::{IllegalAction, PlayerId, RulesResult};
use crate::rules::{
    Action, ActionRecord, Continuation, GameEvent, Pending, Phase, ReserveSource, StateDelta,
};
use crate::tokens::{Cell, Gem, Token, TokenCounts};

impl Game {
    /// Apply an action for the active player.
    ///
    /// On error the game is unchanged.
    pub fn apply(&mut self, action: &Action) -> RulesResult<StateDelta> {
        if self.status.is_some() {
            return Err(IllegalAction::GameOver);
        }
        if !self.turn.phase.accepts(action.kind()) {
            return Err(IllegalAction::WrongPhase);
        }

        let player = self.turn.active;
        let turn = self.turn.turn_number;
        let sequence = self.turn.sequence;

        let mut staged = self.clone();
        let mut events = Vec::new();
        let continuation = staged.resolve(player, action, &mut events)?;
        staged.turn.sequence += 1;
        staged
            .history
            .push_back(ActionRecord::new(player, action.clone(), turn, sequence));

        debug_assert_eq!(staged.token_totals(), self.token_totals());
        debug_assert_eq!(staged.privilege_total(), self.privilege_total());
        log::debug!("turn {turn}: {player} {action:?} -> {continuation:?}");

        *self = staged;
        Ok(StateDelta {
            player,
            events,
            continuation,
        })
    }

    fn resolve(
        &mut self,
        player: PlayerId,
        action: &Action,
        events: &mut Vec<GameEvent>,
    ) -> RulesResult<Continuation> {
        match *action {
            Action::UsePrivilege { cell } => {
                self.use_privilege(player, cell, events)?;
                Ok(self.after_optional(events))
            }
            Action::ReplenishBoard => {
                self.replenish_board(player, events)?;
                Ok(self.after_optional(events))
            }
            Action::TakeTokens { ref cells } => {
                self.take_tokens(player, cells, events)?;
                Ok(self.advance(events))
            }
            Action::TakeGoldAndReserve { gold, source } => {
                self.take_gold_and_reserve(player, gold, source, events)?;
                Ok(self.advance(events))
            }
            Action::PurchaseCard { card, bonus } => {
                self.purchase_card(player, card, bonus, events)?;
                Ok(self.advance(events))
            }
            Action::TakeMatchingToken { cell } => {
                let Phase::TakeMatchingToken { color } = self.turn.phase else {
                    return Err(IllegalAction::WrongPhase);
                };
                self.take_matching_token(player, color, cell, events)?;
                Ok(self.advance(events))
            }
            Action::StealToken { token } => {
                self.steal_token(player, token, events)?;
                Ok(self.advance(events))
            }
            Action::ChooseRoyal { royal } => {
                self.choose_royal(player, royal, events)?;
                Ok(self.advance(events))
            }
            Action::DiscardTokens { ref tokens } => {
                let Phase::Discard { excess } = self.turn.phase else {
                    return Err(IllegalAction::WrongPhase);
                };
                self.discard_tokens(player, excess, tokens, events)?;
                Ok(self.finish_turn(events))
            }
        }
    }

    // === Optional actions ===

    fn use_privilege(&mut self, player: PlayerId, cell: Cell, events: &mut Vec<GameEvent>) -> RulesResult<()> {
        if self.players[player].privileges == 0 {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }
        let token = self.board.grid.take_single(cell)?;
        self.board.return_privilege(&mut self.players[player])?;
        self.players[player].tokens.add(token, 1);
        events.push(GameEvent::PrivilegeUsed { player, cell, token });
        Ok(())
    }

    fn replenish_board(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> RulesResult<()> {
        let placed = self.board.replenish(&mut self.rng)?;
        events.push(GameEvent::BoardReplenished { placed });
        self.grant_privilege(player.opponent(), events);
        Ok(())
    }

    // === Mandatory actions ===

    fn take_tokens(&mut self, player: PlayerId, cells: &[Cell], events: &mut Vec<GameEvent>) -> RulesResult<()> {
        let taken = self.board.grid.take_line(cells)?;
        self.players[player].tokens.add_all(&taken.tokens);
        events.push(GameEvent::TokensTaken {
            player,
            tokens: taken.tokens,
        });
        if taken.grants_opponent_privilege {
            self.grant_privilege(player.opponent(), events);
        }
        Ok(())
    }

    fn take_gold_and_reserve(
        &mut self,
        player: PlayerId,
        gold: Cell,
        source: ReserveSource,
        events: &mut Vec<GameEvent>,
    ) -> RulesResult<()> {
        if self.players[player].reserved.len() >= usize::from(self.config.reserve_limit) {
            return Err(IllegalAction::ReserveLimitReached);
        }
        if !self.board.grid.has_gold() {
            return Err(IllegalAction::NoGoldOnBoard);
        }
        if !self.board.reserve_source_available(source) {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }

        let token = self.board.grid.take_gold(gold)?;
        let (card, revealed) = self.board.take_for_reserve(source)?;
        let hand = &mut self.players[player];
        hand.tokens.add(token, 1);
        hand.reserved.push(card);

        events.push(GameEvent::CardReserved {
            player,
            card,
            source,
            gold,
        });
        if let ReserveSource::Pyramid(_) = source {
            events.push(GameEvent::SlotRefilled { card: revealed });
        }
        Ok(())
    }

    fn purchase_card(
        &mut self,
        player: PlayerId,
        id: CardId,
        bonus: Option<Gem>,
        events: &mut Vec<GameEvent>,
    ) -> RulesResult<()> {
        let reserved_at = self.players[player].reserved.iter().position(|&c| c == id);
        if reserved_at.is_none() && !self.board.pyramid.contains(id) {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }
        let card = self.card_def(id)?;
        let color = self.purchase_color(player, &card, bonus)?;
        let paid = self.players[player].payment_for(&card)?;

        let spent = self.players[player].tokens.remove_all(&paid);
        debug_assert!(spent, "payment_for only picks held tokens");
        self.board.bag.return_counts(&paid);

        match reserved_at {
            Some(index) => {
                self.players[player].reserved.remove(index);
            }
            None => {
                let (_, revealed) = self.board.take_from_pyramid(id)?;
                events.push(GameEvent::SlotRefilled { card: revealed });
            }
        }

        let reached = self.players[player].acquire(&card, color, &self.config.royal_crown_thresholds);
        events.push(GameEvent::CardPurchased {
            player,
            card: id,
            color,
            paid,
        });

        if let Some(ability) = card.ability {
            self.card_ability(player, ability, color, events);
        }
        for threshold in reached {
            log::trace!("{player} reached {threshold} crowns");
            self.turn.queue(Pending::ChooseRoyal);
        }
        Ok(())
    }

    /// The gem group a purchase counts toward.
    fn purchase_color(&self, player: PlayerId, card: &CardDef, bonus: Option<Gem>) -> RulesResult<Option<Gem>> {
        if card.is_joker() {
            let gem = bonus.ok_or(IllegalAction::NoBonusToCopy)?;
            if self.players[player].bonuses[gem] == 0 {
                return Err(IllegalAction::NoBonusToCopy);
            }
            Ok(Some(gem))
        } else if bonus.is_some() {
            Err(IllegalAction::NotOwnedOrAvailable)
        } else {
            Ok(card.color.gem())
        }
    }

    fn card_ability(&mut self, player: PlayerId, ability: Ability, color: Option<Gem>, events: &mut Vec<GameEvent>) {
        match ability {
            Ability::ExtraTurn => self.grant_extra_turn(player, events),
            Ability::TakeMatchingToken => match color {
                Some(gem) => self.turn.queue(Pending::TakeMatchingToken(gem)),
                None => events.push(GameEvent::AbilityIgnored { player, ability }),
            },
            Ability::TakePrivilege => self.grant_privilege(player, events),
            Ability::StealToken => self.turn.queue(Pending::StealToken),
            // Already applied through the chosen colour.
            Ability::CopyBonus => {}
        }
    }

    fn royal_ability(&mut self, player: PlayerId, ability: Ability, events: &mut Vec<GameEvent>) {
        match ability {
            Ability::ExtraTurn => self.grant_extra_turn(player, events),
            Ability::TakePrivilege => self.grant_privilege(player, events),
            Ability::StealToken => self.turn.queue_next(Pending::StealToken),
            Ability::TakeMatchingToken | Ability::CopyBonus => {
                events.push(GameEvent::AbilityIgnored { player, ability });
            }
        }
    }

    // === Follow-up decisions ===

    fn take_matching_token(
        &mut self,
        player: PlayerId,
        color: Gem,
        cell: Cell,
        events: &mut Vec<GameEvent>,
    ) -> RulesResult<()> {
        let token = self.board.grid.take_exact(cell, Token::from(color))?;
        self.players[player].tokens.add(token, 1);
        events.push(GameEvent::MatchingTokenTaken { player, cell, token });
        Ok(())
    }

    fn steal_token(&mut self, player: PlayerId, token: Token, events: &mut Vec<GameEvent>) -> RulesResult<()> {
        if token.is_gold() {
            return Err(IllegalAction::IncludesGold);
        }
        let (thief, victim) = self.players.split_mut(player);
        if !victim.tokens.remove(token, 1) {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }
        thief.tokens.add(token, 1);
        events.push(GameEvent::TokenStolen {
            player,
            from: player.opponent(),
            token,
        });
        Ok(())
    }

    fn choose_royal(&mut self, player: PlayerId, royal: RoyalId, events: &mut Vec<GameEvent>) -> RulesResult<()> {
        let card = self.board.take_royal(royal)?;
        self.players[player].add_royal(&card);
        events.push(GameEvent::RoyalTaken { player, royal });
        if let Some(ability) = card.ability {
            self.royal_ability(player, ability, events);
        }
        Ok(())
    }

    fn discard_tokens(
        &mut self,
        player: PlayerId,
        excess: u8,
        tokens: &TokenCounts,
        events: &mut Vec<GameEvent>,
    ) -> RulesResult<()> {
        if tokens.total() != u16::from(excess) || !self.players[player].tokens.remove_all(tokens) {
            return Err(IllegalAction::InvalidDiscard);
        }
        self.board.bag.return_counts(tokens);
        events.push(GameEvent::TokensDiscarded {
            player,
            tokens: *tokens,
        });
        Ok(())
    }

    // === Shared steps ===

    fn grant_privilege(&mut self, to: PlayerId, events: &mut Vec<GameEvent>) {
        let (recipient, other) = self.players.split_mut(to);
        let grant = self.board.grant_privilege(recipient, other);
        events.push(GameEvent::PrivilegeGranted { player: to, grant });
    }

    fn grant_extra_turn(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) {
        self.turn.extra_turn = true;
        events.push(GameEvent::ExtraTurnGranted { player });
    }
}
