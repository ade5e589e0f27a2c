//! Draw piles and the face-up pyramid.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::{CardId, Level};
use crate::core::GameRng;

/// Face-down draw pile for one level. Draws pop from the front.
///
/// Backed by a persistent vector, so cloning a game shares the pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    level: Level,
    cards: Vector<CardId>,
}

impl Deck {
    /// A deck in the given order.
    #[must_use]
    pub fn new(level: Level, cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            level,
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck shuffled once with `rng`.
    #[must_use]
    pub fn shuffled(level: Level, cards: &[CardId], rng: &mut GameRng) -> Self {
        let mut order = cards.to_vec();
        rng.shuffle(&mut order);
        Self::new(level, order)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Take the top card. `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}

/// Where a card sat in the pyramid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub level: Level,
    pub slot: usize,
}

/// Face-up cards, a fixed row of slots per level.
///
/// A slot empties permanently once its level's deck runs out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pyramid {
    slots: [Vec<Option<CardId>>; 3],
}

impl Pyramid {
    /// Empty slots: `counts` per level, level 1 first.
    #[must_use]
    pub fn new(counts: [u8; 3]) -> Self {
        Self {
            slots: counts.map(|n| vec![None; usize::from(n)]),
        }
    }

    /// Fill every empty slot from its level's deck.
    pub fn deal(&mut self, decks: &mut [Deck; 3]) {
        for level in Level::ALL {
            let deck = &mut decks[level.index()];
            for slot in self.slots[level.index()].iter_mut().filter(|s| s.is_none()) {
                *slot = deck.draw();
            }
        }
    }

    /// Locate a face-up card.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<SlotRef> {
        Level::ALL.into_iter().find_map(|level| {
            self.slots[level.index()]
                .iter()
                .position(|&s| s == Some(card))
                .map(|slot| SlotRef { level, slot })
        })
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    /// Remove a face-up card, leaving its slot empty.
    pub fn take(&mut self, card: CardId) -> Option<SlotRef> {
        let at = self.position(card)?;
        self.slots[at.level.index()][at.slot] = None;
        Some(at)
    }

    /// Refill one slot from the matching deck. Returns the revealed card,
    /// or `None` when the deck is exhausted and the slot stays empty.
    pub fn replace_slot(&mut self, at: SlotRef, deck: &mut Deck) -> Option<CardId> {
        debug_assert_eq!(deck.level(), at.level);
        let revealed = deck.draw();
        if let Some(slot) = self.slots[at.level.index()].get_mut(at.slot) {
            *slot = revealed;
        }
        revealed
    }

    /// Slots of one level, including empty ones.
    #[must_use]
    pub fn slots(&self, level: Level) -> &[Option<CardId>] {
        &self.slots[level.index()]
    }

    /// Face-up cards in level then slot order.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.slots.iter().flatten().flatten().copied()
    }

    /// Number of face-up cards per level.
    #[must_use]
    pub fn sizes(&self) -> [usize; 3] {
        Level::ALL.map(|level| self.slots[level.index()].iter().flatten().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<u16>) -> Vec<CardId> {
        range.map(CardId::new).collect()
    }

    fn decks() -> [Deck; 3] {
        [
            Deck::new(Level::One, ids(1..8)),
            Deck::new(Level::Two, ids(20..25)),
            Deck::new(Level::Three, ids(40..43)),
        ]
    }

    #[test]
    fn test_deck_draws_from_front_until_empty() {
        let mut deck = Deck::new(Level::One, ids(1..3));
        assert_eq!(deck.draw(), Some(CardId::new(1)));
        assert_eq!(deck.draw(), Some(CardId::new(2)));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let cards = ids(1..31);
        let deck = Deck::shuffled(Level::One, &cards, &mut GameRng::new(5));
        let mut drawn: Vec<_> = deck.iter().collect();
        assert_ne!(drawn, cards);
        drawn.sort_unstable();
        assert_eq!(drawn, cards);
    }

    #[test]
    fn test_deal_fills_slots() {
        let mut decks = decks();
        let mut pyramid = Pyramid::new([5, 4, 3]);
        pyramid.deal(&mut decks);

        assert_eq!(pyramid.sizes(), [5, 4, 3]);
        assert_eq!(decks[0].len(), 2);
        assert_eq!(decks[1].len(), 1);
        assert_eq!(decks[2].len(), 0);
        assert_eq!(pyramid.cards().next(), Some(CardId::new(1)));
    }

    #[test]
    fn test_take_and_replace() {
        let mut decks = decks();
        let mut pyramid = Pyramid::new([5, 4, 3]);
        pyramid.deal(&mut decks);

        let at = pyramid.take(CardId::new(21)).unwrap();
        assert_eq!(at, SlotRef { level: Level::Two, slot: 1 });
        assert!(!pyramid.contains(CardId::new(21)));
        assert_eq!(pyramid.take(CardId::new(21)), None);

        let revealed = pyramid.replace_slot(at, &mut decks[1]);
        assert_eq!(revealed, Some(CardId::new(24)));
        assert_eq!(pyramid.slots(Level::Two)[1], Some(CardId::new(24)));
    }

    #[test]
    fn test_exhausted_deck_leaves_slot_empty() {
        let mut decks = decks();
        let mut pyramid = Pyramid::new([5, 4, 3]);
        pyramid.deal(&mut decks);

        let at = pyramid.take(CardId::new(40)).unwrap();
        assert_eq!(pyramid.replace_slot(at, &mut decks[2]), None);
        assert_eq!(pyramid.sizes(), [5, 4, 2]);
        assert_eq!(pyramid.slots(Level::Three)[0], None);
    }
}
