//! The built-in card set: 30 / 24 / 13 jewel cards and 4 royals.
//!
//! Cost columns are `[pearl, black, red, green, blue, white]`.

use super::definition::Ability::{self, *};
use super::definition::CardColor::{self, *};
use super::definition::{CardDef, CardId, Level, RoyalCard, RoyalId};
use crate::tokens::TokenCounts;

/// (colour, points, bonus, ability, crowns, cost)
type Row = (CardColor, u8, u8, Option<Ability>, u8, [u8; 6]);

#[rustfmt::skip]
const LEVEL_1: [Row; 30] = [
    (Black, 0, 1, None, 0, [0, 0, 2, 1, 0, 0]),
    (Black, 0, 1, Some(TakeMatchingToken), 0, [0, 0, 0, 2, 2, 0]),
    (Black, 1, 1, None, 0, [0, 0, 1, 1, 1, 1]),
    (Black, 0, 1, Some(ExtraTurn), 0, [1, 0, 0, 0, 2, 1]),
    (Black, 0, 1, None, 1, [0, 0, 3, 0, 0, 1]),
    (Red, 0, 1, None, 0, [0, 0, 0, 2, 1, 0]),
    (Red, 0, 1, Some(TakeMatchingToken), 0, [0, 0, 0, 0, 2, 2]),
    (Red, 1, 1, None, 0, [0, 1, 0, 1, 1, 1]),
    (Red, 0, 1, Some(ExtraTurn), 0, [1, 1, 0, 0, 0, 2]),
    (Red, 0, 1, None, 1, [0, 1, 0, 3, 0, 0]),
    (Green, 0, 1, None, 0, [0, 0, 0, 0, 2, 1]),
    (Green, 0, 1, Some(TakeMatchingToken), 0, [0, 2, 0, 0, 0, 2]),
    (Green, 1, 1, None, 0, [0, 1, 1, 0, 1, 1]),
    (Green, 0, 1, Some(ExtraTurn), 0, [1, 2, 1, 0, 0, 0]),
    (Green, 0, 1, None, 1, [0, 0, 1, 0, 3, 0]),
    (Blue, 0, 1, None, 0, [0, 1, 0, 0, 0, 2]),
    (Blue, 0, 1, Some(TakeMatchingToken), 0, [0, 2, 2, 0, 0, 0]),
    (Blue, 1, 1, None, 0, [0, 1, 1, 1, 0, 1]),
    (Blue, 0, 1, Some(ExtraTurn), 0, [1, 0, 2, 1, 0, 0]),
    (Blue, 0, 1, None, 1, [0, 0, 0, 1, 0, 3]),
    (White, 0, 1, None, 0, [0, 2, 1, 0, 0, 0]),
    (White, 0, 1, Some(TakeMatchingToken), 0, [0, 0, 2, 2, 0, 0]),
    (White, 1, 1, None, 0, [0, 1, 1, 1, 1, 0]),
    (White, 0, 1, Some(ExtraTurn), 0, [1, 0, 0, 2, 1, 0]),
    (White, 0, 1, None, 1, [0, 3, 0, 0, 1, 0]),
    (Joker, 1, 1, Some(CopyBonus), 0, [1, 2, 0, 0, 2, 0]),
    (Joker, 1, 1, Some(CopyBonus), 0, [1, 0, 2, 0, 0, 2]),
    (Points, 1, 0, None, 1, [0, 3, 0, 0, 0, 0]),
    (Points, 1, 0, None, 1, [0, 0, 0, 0, 3, 0]),
    (Points, 1, 0, Some(TakePrivilege), 0, [1, 0, 2, 0, 0, 1]),
];

#[rustfmt::skip]
const LEVEL_2: [Row; 24] = [
    (Black, 1, 1, Some(TakePrivilege), 0, [1, 0, 3, 0, 2, 0]),
    (Black, 2, 1, None, 1, [1, 0, 0, 4, 0, 2]),
    (Black, 1, 2, None, 0, [1, 0, 2, 2, 0, 2]),
    (Black, 2, 1, Some(StealToken), 0, [1, 0, 0, 0, 4, 1]),
    (Red, 1, 1, Some(TakePrivilege), 0, [1, 0, 0, 3, 0, 2]),
    (Red, 2, 1, None, 1, [1, 2, 0, 0, 4, 0]),
    (Red, 1, 2, None, 0, [1, 2, 0, 2, 2, 0]),
    (Red, 2, 1, Some(StealToken), 0, [1, 1, 0, 0, 0, 4]),
    (Green, 1, 1, Some(TakePrivilege), 0, [1, 2, 0, 0, 3, 0]),
    (Green, 2, 1, None, 1, [1, 0, 2, 0, 0, 4]),
    (Green, 1, 2, None, 0, [1, 0, 2, 0, 2, 2]),
    (Green, 2, 1, Some(StealToken), 0, [1, 4, 1, 0, 0, 0]),
    (Blue, 1, 1, Some(TakePrivilege), 0, [1, 0, 2, 0, 0, 3]),
    (Blue, 2, 1, None, 1, [1, 4, 0, 2, 0, 0]),
    (Blue, 1, 2, None, 0, [1, 2, 0, 2, 0, 2]),
    (Blue, 2, 1, Some(StealToken), 0, [1, 0, 4, 1, 0, 0]),
    (White, 1, 1, Some(TakePrivilege), 0, [1, 3, 0, 2, 0, 0]),
    (White, 2, 1, None, 1, [1, 0, 4, 0, 2, 0]),
    (White, 1, 2, None, 0, [1, 2, 2, 0, 2, 0]),
    (White, 2, 1, Some(StealToken), 0, [1, 0, 0, 4, 1, 0]),
    (Joker, 2, 1, Some(CopyBonus), 1, [1, 3, 0, 0, 0, 3]),
    (Joker, 2, 1, Some(CopyBonus), 1, [1, 0, 0, 3, 3, 0]),
    (Points, 3, 0, None, 2, [1, 0, 0, 0, 5, 0]),
    (Points, 3, 0, None, 2, [1, 5, 0, 0, 0, 0]),
];

#[rustfmt::skip]
const LEVEL_3: [Row; 13] = [
    (Black, 4, 1, None, 0, [1, 0, 5, 3, 0, 0]),
    (Black, 3, 1, None, 2, [1, 0, 0, 0, 5, 3]),
    (Red, 4, 1, None, 0, [1, 0, 0, 5, 3, 0]),
    (Red, 3, 1, None, 2, [1, 3, 0, 0, 0, 5]),
    (Green, 4, 1, None, 0, [1, 0, 0, 0, 5, 3]),
    (Green, 3, 1, None, 2, [1, 5, 3, 0, 0, 0]),
    (Blue, 4, 1, None, 0, [1, 3, 0, 0, 0, 5]),
    (Blue, 3, 1, None, 2, [1, 0, 5, 3, 0, 0]),
    (White, 4, 1, None, 0, [1, 5, 3, 0, 0, 0]),
    (White, 3, 1, None, 2, [1, 0, 0, 5, 3, 0]),
    (Joker, 3, 1, Some(CopyBonus), 0, [1, 2, 2, 2, 2, 2]),
    (Points, 6, 0, None, 3, [1, 0, 0, 8, 0, 0]),
    (Points, 5, 0, None, 3, [0, 0, 0, 0, 8, 0]),
];

const ROYALS: [(u8, Option<Ability>); 4] = [
    (3, None),
    (2, Some(TakePrivilege)),
    (2, Some(StealToken)),
    (2, Some(ExtraTurn)),
];

fn cost_of([pearl, black, red, green, blue, white]: [u8; 6]) -> TokenCounts {
    TokenCounts::from_array([black, red, green, blue, white, pearl, 0])
}

/// Every standard jewel card, ids numbered from 1 across the levels.
pub(crate) fn cards() -> Vec<CardDef> {
    let levels: [(Level, &[Row]); 3] = [
        (Level::One, &LEVEL_1),
        (Level::Two, &LEVEL_2),
        (Level::Three, &LEVEL_3),
    ];

    let mut next = 1;
    let mut cards = Vec::with_capacity(LEVEL_1.len() + LEVEL_2.len() + LEVEL_3.len());
    for (level, rows) in levels {
        for &(color, points, bonus, ability, crowns, cost) in rows {
            cards.push(CardDef {
                id: CardId::new(next),
                level,
                color,
                points,
                bonus,
                ability,
                crowns,
                cost: cost_of(cost),
            });
            next += 1;
        }
    }
    cards
}

pub(crate) fn royals() -> Vec<RoyalCard> {
    ROYALS
        .iter()
        .zip(1..)
        .map(|(&(points, ability), id)| RoyalCard {
            id: RoyalId(id),
            points,
            ability,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Gem, Token};

    #[test]
    fn test_level_sizes() {
        let cards = cards();
        let count = |level| cards.iter().filter(|c| c.level == level).count();
        assert_eq!(count(Level::One), 30);
        assert_eq!(count(Level::Two), 24);
        assert_eq!(count(Level::Three), 13);
    }

    #[test]
    fn test_every_gem_has_same_share() {
        let cards = cards();
        for gem in Gem::ALL {
            let n = cards.iter().filter(|c| c.color.gem() == Some(gem)).count();
            assert_eq!(n, 5 + 4 + 2, "{gem}");
        }
    }

    #[test]
    fn test_cost_columns() {
        let cards = cards();
        // First black level-1 card: 2 red, 1 green.
        assert_eq!(cards[0].cost[Token::Red], 2);
        assert_eq!(cards[0].cost[Token::Green], 1);
        assert_eq!(cards[0].cost.total(), 3);
        // Last level-3 card costs 8 blue.
        let last = cards.last().unwrap();
        assert_eq!(last.cost[Token::Blue], 8);
        assert_eq!(last.id, CardId::new(67));
    }

    #[test]
    fn test_no_gold_in_any_cost() {
        assert!(cards().iter().all(|c| c.cost[Token::Gold] == 0));
    }

    #[test]
    fn test_royals() {
        let royals = royals();
        assert_eq!(royals.len(), 4);
        assert_eq!(royals[0].id, RoyalId(1));
        assert_eq!(royals[0].points, 3);
        assert_eq!(royals[3].ability, Some(Ability::ExtraTurn));
    }
}
