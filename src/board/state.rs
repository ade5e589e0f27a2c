//! The shared board: token grid, bag, pyramid, decks, privilege pool and
//! royal cards.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, Deck, Level, Pyramid, RoyalCard, RoyalId, SlotRef};
use crate::core::{GameRng, IllegalAction, RulesConfig, RulesResult};
use crate::rules::ReserveSource;
use crate::tokens::{Bag, TokenCounts, TokenGrid};

/// Shared mutable game state outside the players' hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grid: TokenGrid,
    pub(crate) bag: Bag,
    pub(crate) pyramid: Pyramid,
    pub(crate) decks: [Deck; 3],
    /// Privileges above the board.
    pub(crate) privileges: u8,
    pub(crate) royals: Vec<RoyalCard>,
}

impl Board {
    /// Standard setup: shuffle each level's deck, deal the pyramid, lay the
    /// whole token pool on the grid in spiral order.
    pub fn setup(
        config: &RulesConfig,
        catalog: &CardCatalog,
        deck_rng: &mut GameRng,
        bag_rng: &mut GameRng,
    ) -> Self {
        let mut decks = Level::ALL.map(|level| Deck::shuffled(level, catalog.level(level), deck_rng));
        let mut pyramid = Pyramid::new(config.pyramid_slots);
        pyramid.deal(&mut decks);

        let mut grid = TokenGrid::new(config.grid_rows, config.grid_cols);
        let mut bag = Bag::from_counts(&config.token_pool());
        if !bag.is_empty() {
            let placed = bag.refill(&mut grid, bag_rng).unwrap_or_default();
            log::trace!("setup placed {placed} tokens, {} left in the bag", bag.len());
        }

        Self {
            grid,
            bag,
            pyramid,
            decks,
            privileges: config.privilege_total,
            royals: catalog
                .royals()
                .iter()
                .take(usize::from(config.royals_in_play))
                .copied()
                .collect(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    #[must_use]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    #[must_use]
    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    #[must_use]
    pub fn deck(&self, level: Level) -> &Deck {
        &self.decks[level.index()]
    }

    /// Privileges in the pool.
    #[must_use]
    pub fn privileges(&self) -> u8 {
        self.privileges
    }

    /// Royal cards still available.
    #[must_use]
    pub fn royals(&self) -> &[RoyalCard] {
        &self.royals
    }

    /// Shuffle the bag onto empty grid cells.
    pub fn replenish(&mut self, rng: &mut GameRng) -> RulesResult<usize> {
        self.bag.refill(&mut self.grid, rng)
    }

    /// Remove a face-up card and refill its slot. Returns the slot and the
    /// newly revealed card, if the deck had one.
    pub fn take_from_pyramid(&mut self, card: CardId) -> RulesResult<(SlotRef, Option<CardId>)> {
        let at = self
            .pyramid
            .take(card)
            .ok_or(IllegalAction::NotOwnedOrAvailable)?;
        let revealed = self
            .pyramid
            .replace_slot(at, &mut self.decks[at.level.index()]);
        Ok((at, revealed))
    }

    /// Draw the top card of a deck, unseen.
    pub fn draw_blind(&mut self, level: Level) -> RulesResult<CardId> {
        self.decks[level.index()]
            .draw()
            .ok_or(IllegalAction::NotOwnedOrAvailable)
    }

    /// Whether a reservation could take a card from `source`.
    #[must_use]
    pub fn reserve_source_available(&self, source: ReserveSource) -> bool {
        match source {
            ReserveSource::Pyramid(card) => self.pyramid.contains(card),
            ReserveSource::Deck(level) => !self.deck(level).is_empty(),
        }
    }

    /// Remove the card a reservation takes, plus the card revealed in its
    /// place when it came from the pyramid.
    pub fn take_for_reserve(&mut self, source: ReserveSource) -> RulesResult<(CardId, Option<CardId>)> {
        match source {
            ReserveSource::Pyramid(card) => {
                let (_, revealed) = self.take_from_pyramid(card)?;
                Ok((card, revealed))
            }
            ReserveSource::Deck(level) => Ok((self.draw_blind(level)?, None)),
        }
    }

    /// Remove a royal card from the pool permanently.
    pub fn take_royal(&mut self, id: RoyalId) -> RulesResult<RoyalCard> {
        let index = self
            .royals
            .iter()
            .position(|r| r.id == id)
            .ok_or(IllegalAction::NotOwnedOrAvailable)?;
        Ok(self.royals.remove(index))
    }

    /// Tokens on the grid plus tokens in the bag.
    #[must_use]
    pub fn token_totals(&self) -> TokenCounts {
        let mut totals = self.grid.counts();
        totals.add_all(&self.bag.counts());
        totals
    }
}
