//! Card catalog for definition lookup.
//!
//! The `CardCatalog` holds every jewel card and royal of a game. It is
//! immutable once built and shared between game clones behind an `Arc`.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "level_1": [
//!     { "color": "blue", "points": 1, "cost": { "red": 2, "pearl": 1 } },
//!     { "color": "joker", "ability": "copy_bonus", "cost": { "black": 3 } }
//!   ],
//!   "level_2": [],
//!   "level_3": [],
//!   "royals": [ { "points": 3 }, { "points": 2, "ability": "extra_turn" } ]
//! }
//! ```
//!
//! Ids are assigned in file order, level 1 first, starting at 1. `bonus`
//! defaults to 1 (0 for `points` cards).

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::definition::{Ability, CardColor, CardDef, CardId, Level, RoyalCard, RoyalId};
use super::standard;
use crate::tokens::{ParseTokenError, Token, TokenCounts};

/// A catalog entry that cannot be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownToken(#[from] ParseTokenError),

    #[error("{0} is registered twice")]
    DuplicateCard(CardId),

    #[error("{0}: joker colour and copy-bonus ability must go together")]
    InconsistentJoker(CardId),

    #[error("{0}: gold cannot be part of a cost")]
    GoldCost(CardId),

    #[error("{0}: bonus must be 0, 1 or 2")]
    BonusOutOfRange(CardId),
}

/// Registry of card definitions and royals.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{CardCatalog, CardColor, CardDef, CardId, Level};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDef::new(CardId::new(1), Level::One, CardColor::Red).with_points(1))
///     .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).map(|c| c.points), Some(1));
/// assert!(catalog.register(CardDef::new(CardId::new(1), Level::Two, CardColor::Red)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDef>,
    levels: [Vec<CardId>; 3],
    royals: Vec<RoyalCard>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard::cards() {
            catalog.insert(card);
        }
        catalog.royals = standard::royals();
        catalog
    }

    /// Register a card after checking it.
    pub fn register(&mut self, card: CardDef) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        Self::check(&card)?;
        self.insert(card);
        Ok(())
    }

    /// Add a royal card.
    pub fn add_royal(&mut self, royal: RoyalCard) {
        self.royals.push(royal);
    }

    fn insert(&mut self, card: CardDef) {
        self.levels[card.level.index()].push(card.id);
        self.cards.insert(card.id, card);
    }

    fn check(card: &CardDef) -> Result<(), CatalogError> {
        if card.is_joker() != (card.ability == Some(Ability::CopyBonus)) {
            return Err(CatalogError::InconsistentJoker(card.id));
        }
        if card.cost[Token::Gold] > 0 {
            return Err(CatalogError::GoldCost(card.id));
        }
        if card.bonus > 2 {
            return Err(CatalogError::BonusOutOfRange(card.id));
        }
        Ok(())
    }

    /// Check every registered card.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.cards.values().try_for_each(Self::check)
    }

    /// Load a catalog from JSON (see the module docs for the format).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        let mut next = 1;

        let levels = [
            (Level::One, file.level_1),
            (Level::Two, file.level_2),
            (Level::Three, file.level_3),
        ];
        for (level, records) in levels {
            for record in records {
                let card = record.into_card(CardId::new(next), level)?;
                catalog.register(card)?;
                next += 1;
            }
        }

        for (record, id) in file.royals.into_iter().zip(1..) {
            catalog.add_royal(RoyalCard {
                id: RoyalId(id),
                points: record.points,
                ability: record.ability,
            });
        }
        Ok(catalog)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDef> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Card ids of one level, in registration order.
    #[must_use]
    pub fn level(&self, level: Level) -> &[CardId] {
        &self.levels[level.index()]
    }

    #[must_use]
    pub fn royals(&self) -> &[RoyalCard] {
        &self.royals
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDef> {
        self.cards.values()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    level_1: Vec<CardRecord>,
    #[serde(default)]
    level_2: Vec<CardRecord>,
    #[serde(default)]
    level_3: Vec<CardRecord>,
    #[serde(default)]
    royals: Vec<RoyalRecord>,
}

#[derive(Deserialize)]
struct CardRecord {
    color: CardColor,
    #[serde(default)]
    points: u8,
    bonus: Option<u8>,
    #[serde(default)]
    ability: Option<Ability>,
    #[serde(default)]
    crowns: u8,
    #[serde(default)]
    cost: BTreeMap<String, u8>,
}

impl CardRecord {
    fn into_card(self, id: CardId, level: Level) -> Result<CardDef, CatalogError> {
        let mut cost = TokenCounts::default();
        for (name, n) in &self.cost {
            cost.add(name.parse::<Token>()?, *n);
        }

        let mut card = CardDef::new(id, level, self.color)
            .with_points(self.points)
            .with_crowns(self.crowns)
            .with_costs(cost);
        if let Some(bonus) = self.bonus {
            card.bonus = bonus;
        }
        if self.ability.is_some() {
            card.ability = self.ability;
        }
        Ok(card)
    }
}

#[derive(Deserialize)]
struct RoyalRecord {
    #[serde(default)]
    points: u8,
    #[serde(default)]
    ability: Option<Ability>,
}
