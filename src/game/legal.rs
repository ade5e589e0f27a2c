//! Legal action enumeration.
//!
//! The enumeration mirrors the resolver's checks: every listed action
//! applies without error, and every action that would apply is listed.
//! Order is stable for a given state (grid row-major, pyramid by level and
//! slot, then reserved cards) so seeded playouts replay exactly.

use super::Game;
use crate::cards::Level;
use crate::core::PlayerId;
use crate::rules::{Action, MandatorySet, Phase, ReserveSource};
use crate::tokens::{Token, TokenCounts};

impl Game {
    /// Every action the active player may take now. Empty only once the
    /// game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.status.is_some() {
            return Vec::new();
        }
        let player = self.turn.active;
        match self.turn.phase {
            Phase::StartOfRound => self.round_actions(player),
            Phase::TakeMatchingToken { color } => self
                .board
                .grid
                .cells_of(Token::from(color))
                .map(|cell| Action::TakeMatchingToken { cell })
                .collect(),
            Phase::StealToken => self.players[player.opponent()]
                .tokens
                .iter()
                .filter(|(token, _)| !token.is_gold())
                .map(|(token, _)| Action::StealToken { token })
                .collect(),
            Phase::ChooseRoyal => self
                .board
                .royals
                .iter()
                .map(|royal| Action::ChooseRoyal { royal: royal.id })
                .collect(),
            Phase::Discard { excess } => discard_choices(&self.players[player].tokens, excess)
                .into_iter()
                .map(|tokens| Action::DiscardTokens { tokens })
                .collect(),
        }
    }

    /// Mandatory action categories the active player could take.
    #[must_use]
    pub fn available_mandatory_actions(&self) -> MandatorySet {
        let player = self.turn.active;
        MandatorySet {
            take_tokens: self.board.grid.has_non_gold(),
            take_gold_and_reserve: self.board.grid.has_gold() && !self.reserve_sources(player).is_empty(),
            purchase_card: !self.purchase_actions(player).is_empty(),
        }
    }

    fn round_actions(&self, player: PlayerId) -> Vec<Action> {
        let grid = &self.board.grid;
        let mut actions = Vec::new();

        if self.players[player].privileges > 0 {
            actions.extend(
                grid.iter()
                    .filter(|(_, token)| matches!(token, Some(t) if !t.is_gold()))
                    .map(|(cell, _)| Action::UsePrivilege { cell }),
            );
        }
        if !self.board.bag.is_empty() {
            actions.push(Action::ReplenishBoard);
        }

        actions.extend(
            grid.legal_lines()
                .into_iter()
                .map(|cells| Action::TakeTokens { cells }),
        );

        let sources = self.reserve_sources(player);
        for gold in grid.cells_of(Token::Gold) {
            actions.extend(
                sources
                    .iter()
                    .map(|&source| Action::TakeGoldAndReserve { gold, source }),
            );
        }

        actions.extend(self.purchase_actions(player));
        actions
    }

    /// Where `player` could reserve from, ignoring gold on the grid.
    fn reserve_sources(&self, player: PlayerId) -> Vec<ReserveSource> {
        if self.players[player].reserved.len() >= usize::from(self.config.reserve_limit) {
            return Vec::new();
        }
        self.board
            .pyramid
            .cards()
            .map(ReserveSource::Pyramid)
            .chain(
                Level::ALL
                    .into_iter()
                    .filter(|&level| !self.board.deck(level).is_empty())
                    .map(ReserveSource::Deck),
            )
            .collect()
    }

    /// Affordable purchases: one per card, or one per owned colour for jokers.
    fn purchase_actions(&self, player: PlayerId) -> Vec<Action> {
        let hand = &self.players[player];
        let mut actions = Vec::new();
        for id in self.board.pyramid.cards().chain(hand.reserved.iter().copied()) {
            let Some(card) = self.catalog.get(id) else {
                continue;
            };
            if !hand.can_afford(card) {
                continue;
            }
            if card.is_joker() {
                actions.extend(
                    hand.bonuses
                        .owned()
                        .map(|gem| Action::PurchaseCard { card: id, bonus: Some(gem) }),
                );
            } else {
                actions.push(Action::PurchaseCard { card: id, bonus: None });
            }
        }
        actions
    }
}

/// Every way to return exactly `excess` tokens from `hand`.
fn discard_choices(hand: &TokenCounts, excess: u8) -> Vec<TokenCounts> {
    fn extend(hand: &TokenCounts, kinds: &[Token], left: u8, current: &mut TokenCounts, out: &mut Vec<TokenCounts>) {
        let Some((&token, rest)) = kinds.split_first() else {
            if left == 0 {
                out.push(*current);
            }
            return;
        };
        for n in 0..=hand.get(token).min(left) {
            current[token] = n;
            extend(hand, rest, left - n, current, out);
        }
        current[token] = 0;
    }

    let mut out = Vec::new();
    extend(hand, &Token::ALL, excess, &mut TokenCounts::default(), &mut out);
    out
}
