//! Card definitions - static card data.
//!
//! A `CardDef` never changes once the catalog is built. Where a card is
//! (deck, pyramid, reserve, purchased) is tracked by the board and the
//! players, by `CardId`.

use serde::{Deserialize, Serialize};

use crate::tokens::{Gem, Token, TokenCounts};

/// Unique identifier for a jewel card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a royal card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoyalId(pub u8);

impl std::fmt::Display for RoyalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Royal({})", self.0)
    }
}

/// Pyramid level. Serialized as 1, 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Zero-based index into per-level tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1, 2 or 3.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            _ => Err(format!("card level must be 1, 2 or 3, got {n}")),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.number()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {}", self.number())
    }
}

/// Printed colour of a card.
///
/// `Points` cards carry no bonus. A `Joker` takes on a gem colour the
/// buyer already owns, chosen at purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Black,
    Red,
    Green,
    Blue,
    White,
    Points,
    Joker,
}

impl CardColor {
    /// The fixed gem colour, for plain gem cards.
    #[must_use]
    pub const fn gem(self) -> Option<Gem> {
        match self {
            CardColor::Black => Some(Gem::Black),
            CardColor::Red => Some(Gem::Red),
            CardColor::Green => Some(Gem::Green),
            CardColor::Blue => Some(Gem::Blue),
            CardColor::White => Some(Gem::White),
            CardColor::Points | CardColor::Joker => None,
        }
    }
}

impl From<Gem> for CardColor {
    fn from(gem: Gem) -> Self {
        match gem {
            Gem::Black => CardColor::Black,
            Gem::Red => CardColor::Red,
            Gem::Green => CardColor::Green,
            Gem::Blue => CardColor::Blue,
            Gem::White => CardColor::White,
        }
    }
}

/// One-shot effect printed on a card or a royal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Take another turn after this one.
    ExtraTurn,
    /// Bonus colour copies one the player already owns (jokers).
    CopyBonus,
    /// Take one grid token of the card's colour.
    TakeMatchingToken,
    /// Gain a privilege.
    TakePrivilege,
    /// Take one non-gold token from the opponent.
    StealToken,
}

/// Static jewel card definition.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{Ability, CardColor, CardDef, CardId, Level};
/// use duel_engine::tokens::Token;
///
/// let card = CardDef::new(CardId::new(1), Level::One, CardColor::Blue)
///     .with_points(1)
///     .with_ability(Ability::ExtraTurn)
///     .with_cost(Token::Red, 2)
///     .with_cost(Token::Pearl, 1);
///
/// assert_eq!(card.bonus, 1);
/// assert_eq!(card.cost.total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDef {
    pub id: CardId,
    pub level: Level,
    pub color: CardColor,
    pub points: u8,
    /// Bonus granted in the card's (resolved) colour: 0, 1 or 2.
    pub bonus: u8,
    pub ability: Option<Ability>,
    pub crowns: u8,
    /// Price in tokens. Never includes gold.
    pub cost: TokenCounts,
}

impl CardDef {
    /// A free, pointless card with one bonus (none for `Points` cards).
    #[must_use]
    pub fn new(id: CardId, level: Level, color: CardColor) -> Self {
        Self {
            id,
            level,
            color,
            points: 0,
            bonus: u8::from(color != CardColor::Points),
            ability: (color == CardColor::Joker).then_some(Ability::CopyBonus),
            crowns: 0,
            cost: TokenCounts::default(),
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: u8) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: u8) -> Self {
        self.bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    #[must_use]
    pub fn with_crowns(mut self, crowns: u8) -> Self {
        self.crowns = crowns;
        self
    }

    /// Add to the price of one token kind.
    #[must_use]
    pub fn with_cost(mut self, token: Token, n: u8) -> Self {
        self.cost.add(token, n);
        self
    }

    /// Replace the whole price.
    #[must_use]
    pub fn with_costs(mut self, cost: TokenCounts) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.color == CardColor::Joker
    }
}

/// A royal card, taken once when a crown milestone is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoyalCard {
    pub id: RoyalId,
    pub points: u8,
    pub ability: Option<Ability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_level_numbers() {
        assert_eq!(Level::One.number(), 1);
        assert_eq!(Level::Three.index(), 2);
        assert_eq!(Level::try_from(2), Ok(Level::Two));
        assert!(Level::try_from(4).is_err());
    }

    #[test]
    fn test_level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Level::Three).unwrap(), "3");
        let level: Level = serde_json::from_str("1").unwrap();
        assert_eq!(level, Level::One);
        assert!(serde_json::from_str::<Level>("0").is_err());
    }

    #[test]
    fn test_card_color_gem() {
        assert_eq!(CardColor::from(Gem::Green).gem(), Some(Gem::Green));
        assert_eq!(CardColor::Joker.gem(), None);
        assert_eq!(CardColor::Points.gem(), None);
    }

    #[test]
    fn test_builder_defaults_by_color() {
        let gem = CardDef::new(CardId::new(1), Level::One, CardColor::Red);
        assert_eq!(gem.bonus, 1);
        assert_eq!(gem.ability, None);

        let points = CardDef::new(CardId::new(2), Level::One, CardColor::Points);
        assert_eq!(points.bonus, 0);

        let joker = CardDef::new(CardId::new(3), Level::Two, CardColor::Joker);
        assert!(joker.is_joker());
        assert_eq!(joker.ability, Some(Ability::CopyBonus));
    }

    #[test]
    fn test_card_def_serialization() {
        let card = CardDef::new(CardId::new(7), Level::Two, CardColor::White)
            .with_points(2)
            .with_crowns(1)
            .with_ability(Ability::StealToken)
            .with_cost(Token::Black, 4);

        let json = serde_json::to_string(&card).unwrap();
        let back: CardDef = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }

    #[test]
    fn test_ability_serde_names() {
        assert_eq!(
            serde_json::to_string(&Ability::TakeMatchingToken).unwrap(),
            "\"take_matching_token\""
        );
    }
}
