//! Unit-test fixtures. Every helper keeps token and privilege totals
//! intact so the conservation checks in `apply` still hold.

use smallvec::SmallVec;

use super::{Game, GameBuilder};
use crate::cards::{CardCatalog, CardDef, CardId};
use crate::core::{PlayerId, RulesConfig};
use crate::tokens::{Cell, Gem, Token, TokenCounts};

/// A game over `cards` (few enough per level to all be face up) with the
/// standard royals. The first player moves first.
pub(crate) fn game_with(cards: Vec<CardDef>, config: RulesConfig) -> Game {
    let mut catalog = CardCatalog::new();
    for card in cards {
        catalog.register(card).unwrap();
    }
    for royal in CardCatalog::standard().royals() {
        catalog.add_royal(*royal);
    }
    GameBuilder::new()
        .with_config(config)
        .with_catalog(catalog)
        .with_first_player(PlayerId::FIRST)
        .build(17)
}

impl Game {
    /// Move one token from the grid (or else the bag) into a hand.
    pub(crate) fn give_token(&mut self, player: PlayerId, token: Token) {
        match self.board.grid.first_of(token) {
            Some(cell) => self.board.grid.set(cell, None),
            None => assert!(self.board.bag.remove(token), "no {token} left to give"),
        }
        self.players[player].tokens.add(token, 1);
    }

    pub(crate) fn give_tokens(&mut self, player: PlayerId, tokens: &TokenCounts) {
        for token in tokens.tokens() {
            self.give_token(player, token);
        }
    }

    /// Move every token of one kind off the grid into a hand.
    pub(crate) fn give_all(&mut self, player: PlayerId, token: Token) {
        while self.board.grid.first_of(token).is_some() {
            self.give_token(player, token);
        }
    }

    /// Move a grid token into the bag.
    pub(crate) fn bag_token(&mut self, cell: Cell) {
        let token = self.board.grid.get(cell).unwrap();
        self.board.grid.set(cell, None);
        self.board.bag.return_tokens([token]);
    }

    /// Move a privilege from the pool to a player.
    pub(crate) fn give_privilege(&mut self, player: PlayerId) {
        assert!(self.board.privileges > 0);
        self.board.privileges -= 1;
        self.players[player].privileges += 1;
    }

    /// Record a card as bought without paying or touching the board.
    pub(crate) fn give_card(&mut self, player: PlayerId, id: CardId, color: Option<Gem>) -> SmallVec<[u8; 2]> {
        let card = self.card_def(id).unwrap();
        let thresholds = self.config.royal_crown_thresholds.clone();
        self.players[player].acquire(&card, color, &thresholds)
    }

    /// Rearrange a full grid so the given cells hold the given tokens.
    /// The displaced tokens fill the other cells.
    pub(crate) fn arrange(&mut self, placed: &[(Cell, Token)]) {
        let mut rest = self.board.grid.counts();
        for &(_, token) in placed {
            assert!(rest.remove(token, 1), "grid has no spare {token}");
        }
        let fixed: Vec<Cell> = placed.iter().map(|&(cell, _)| cell).collect();
        let free: Vec<Cell> = self
            .board
            .grid
            .iter()
            .filter(|(cell, token)| token.is_some() && !fixed.contains(cell))
            .map(|(cell, _)| cell)
            .collect();

        let mut rest = rest.tokens().collect::<Vec<_>>().into_iter();
        for cell in free {
            self.board.grid.set(cell, rest.next());
        }
        assert!(rest.next().is_none(), "arrange needs a full grid");
        for &(cell, token) in placed {
            self.board.grid.set(cell, Some(token));
        }
    }
}
