//! Card system: definitions, catalog, decks and the pyramid.
//!
//! ## Key Types
//!
//! - `CardId` / `RoyalId`: identifiers used everywhere outside the catalog
//! - `CardDef`: static jewel card data (colour, points, bonus, ability, crowns, cost)
//! - `CardCatalog`: definition lookup, built in or loaded from JSON
//! - `Deck`: per-level draw pile
//! - `Pyramid`: the face-up cards

pub mod catalog;
pub mod deck;
pub mod definition;
mod standard;

pub use catalog::{CardCatalog, CatalogError};
pub use deck::{Deck, Pyramid, SlotRef};
pub use definition::{Ability, CardColor, CardDef, CardId, Level, RoyalCard, RoyalId};
