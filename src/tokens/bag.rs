//! The bag: tokens out of play, waiting to go back on the grid.

use serde::{Deserialize, Serialize};

use super::{Token, TokenCounts, TokenGrid};
use crate::core::{GameRng, IllegalAction, RulesResult};

/// Unordered holding area for spent and discarded tokens.
///
/// Order inside the bag carries no meaning; every draw shuffles first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bag {
    tokens: Vec<Token>,
}

impl Bag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A bag holding exactly `counts`.
    #[must_use]
    pub fn from_counts(counts: &TokenCounts) -> Self {
        Self {
            tokens: counts.tokens().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> TokenCounts {
        self.tokens.iter().copied().collect()
    }

    /// Empty the bag into a shuffled sequence.
    pub fn draw_all(&mut self, rng: &mut GameRng) -> Vec<Token> {
        let mut drawn = std::mem::take(&mut self.tokens);
        rng.shuffle(&mut drawn);
        drawn
    }

    /// Put tokens back.
    pub fn return_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.tokens.extend(tokens);
    }

    pub fn return_counts(&mut self, counts: &TokenCounts) {
        self.return_tokens(counts.tokens());
    }

    /// Test support: pull one specific token out.
    #[cfg(test)]
    pub(crate) fn remove(&mut self, token: Token) -> bool {
        match self.tokens.iter().position(|&t| t == token) {
            Some(index) => {
                self.tokens.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Shuffle the bag onto the empty cells of `grid` in spiral order.
    ///
    /// Returns how many tokens were placed. Tokens that find no empty cell
    /// stay in the bag.
    pub fn refill(&mut self, grid: &mut TokenGrid, rng: &mut GameRng) -> RulesResult<usize> {
        if self.is_empty() {
            return Err(IllegalAction::BagEmpty);
        }
        let drawn = self.draw_all(rng);
        let total = drawn.len();
        let leftover = grid.place_spiral(drawn);
        let placed = total - leftover.len();
        self.tokens = leftover;
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RulesConfig;
    use crate::tokens::Cell;

    #[test]
    fn test_draw_all_empties_and_keeps_counts() {
        let pool = RulesConfig::default().token_pool();
        let mut bag = Bag::from_counts(&pool);
        let mut rng = GameRng::new(3);

        let drawn = bag.draw_all(&mut rng);
        assert!(bag.is_empty());
        assert_eq!(drawn.len(), 25);
        assert_eq!(drawn.into_iter().collect::<TokenCounts>(), pool);
    }

    #[test]
    fn test_refill_empty_bag_fails() {
        let mut bag = Bag::new();
        let mut grid = TokenGrid::new(5, 5);
        assert_eq!(
            bag.refill(&mut grid, &mut GameRng::new(0)),
            Err(IllegalAction::BagEmpty)
        );
    }

    #[test]
    fn test_refill_full_pool_fills_grid() {
        let pool = RulesConfig::default().token_pool();
        let mut bag = Bag::from_counts(&pool);
        let mut grid = TokenGrid::new(5, 5);

        assert_eq!(bag.refill(&mut grid, &mut GameRng::new(1)), Ok(25));
        assert!(bag.is_empty());
        assert_eq!(grid.counts(), pool);
    }

    #[test]
    fn test_refill_partial_leaves_cells_empty() {
        let mut bag = Bag::new();
        bag.return_tokens([Token::Red, Token::Pearl]);
        let mut grid = TokenGrid::new(5, 5);

        assert_eq!(bag.refill(&mut grid, &mut GameRng::new(1)), Ok(2));
        assert_eq!(grid.empty_cells(), 23);
        // The centre and the cell below it fill first.
        assert!(grid.get(Cell::new(2, 2)).is_some());
        assert!(grid.get(Cell::new(3, 2)).is_some());
    }

    #[test]
    fn test_refill_overflow_stays_in_bag() {
        let mut bag = Bag::new();
        bag.return_counts(&TokenCounts::from_array([3, 0, 0, 0, 0, 0, 0]));
        let mut grid = TokenGrid::new(1, 2);

        assert_eq!(bag.refill(&mut grid, &mut GameRng::new(1)), Ok(2));
        assert_eq!(bag.len(), 1);
    }
}
