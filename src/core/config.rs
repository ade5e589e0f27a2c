//! Rule constants.
//!
//! `RulesConfig::default()` is the standard two-player game. Everything the
//! resolver compares against (win thresholds, hand and reserve limits, crown
//! milestones, the size of the token pool and of the grid) is read from
//! here, so scenario tests and variants can shrink or stretch the rules
//! without touching the engine.
//!
//! Configs load from JSON with every field optional:
//!
//! ```
//! use duel_engine::core::RulesConfig;
//!
//! let config = RulesConfig::from_json(r#"{ "points_to_win": 15 }"#).unwrap();
//! assert_eq!(config.points_to_win, 15);
//! assert_eq!(config.crowns_to_win, 10);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::tokens::{Gem, Token, TokenCounts};

/// Every tunable rule constant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Prestige points that win the game.
    pub points_to_win: u16,

    /// Crowns that win the game.
    pub crowns_to_win: u8,

    /// Points on purchased cards of a single colour that win the game.
    pub color_points_to_win: u16,

    /// Maximum tokens a player may hold between turns.
    pub token_limit: u8,

    /// Maximum reserved cards per player.
    pub reserve_limit: u8,

    /// Privilege scrolls in the game (pool plus both players).
    pub privilege_total: u8,

    /// Crown totals that each grant one royal card, the first time they are reached.
    pub royal_crown_thresholds: SmallVec<[u8; 2]>,

    /// Royal cards face up at setup.
    pub royals_in_play: u8,

    /// Face-up pyramid slots for levels 1, 2 and 3.
    pub pyramid_slots: [u8; 3],

    /// Tokens of each gem colour in the pool.
    pub tokens_per_gem: u8,

    /// Pearl tokens in the pool.
    pub pearl_tokens: u8,

    /// Gold tokens in the pool.
    pub gold_tokens: u8,

    /// Token grid height.
    pub grid_rows: u8,

    /// Token grid width.
    pub grid_cols: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            points_to_win: 20,
            crowns_to_win: 10,
            color_points_to_win: 10,
            token_limit: 10,
            reserve_limit: 3,
            privilege_total: 3,
            royal_crown_thresholds: smallvec![3, 6],
            royals_in_play: 4,
            pyramid_slots: [5, 4, 3],
            tokens_per_gem: 4,
            pearl_tokens: 2,
            gold_tokens: 3,
            grid_rows: 5,
            grid_cols: 5,
        }
    }
}

impl RulesConfig {
    /// Parse a config from JSON. Missing fields keep their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The full token pool: every token in the game, wherever it sits.
    #[must_use]
    pub fn token_pool(&self) -> TokenCounts {
        let mut pool = TokenCounts::default();
        for gem in Gem::ALL {
            pool.add(Token::from(gem), self.tokens_per_gem);
        }
        pool.add(Token::Pearl, self.pearl_tokens);
        pool.add(Token::Gold, self.gold_tokens);
        pool
    }

    /// Set the points needed to win.
    #[must_use]
    pub fn with_points_to_win(mut self, points: u16) -> Self {
        self.points_to_win = points;
        self
    }

    /// Set the crowns needed to win.
    #[must_use]
    pub fn with_crowns_to_win(mut self, crowns: u8) -> Self {
        self.crowns_to_win = crowns;
        self
    }

    /// Set the single-colour points needed to win.
    #[must_use]
    pub fn with_color_points_to_win(mut self, points: u16) -> Self {
        self.color_points_to_win = points;
        self
    }

    /// Set the between-turn token limit.
    #[must_use]
    pub fn with_token_limit(mut self, limit: u8) -> Self {
        self.token_limit = limit;
        self
    }

    /// Set the reserve limit.
    #[must_use]
    pub fn with_reserve_limit(mut self, limit: u8) -> Self {
        self.reserve_limit = limit;
        self
    }

    /// Replace the crown milestones that grant royals.
    #[must_use]
    pub fn with_crown_thresholds(mut self, thresholds: impl IntoIterator<Item = u8>) -> Self {
        self.royal_crown_thresholds = thresholds.into_iter().collect();
        self
    }

    /// Set the token pool.
    #[must_use]
    pub fn with_token_pool(mut self, per_gem: u8, pearls: u8, gold: u8) -> Self {
        self.tokens_per_gem = per_gem;
        self.pearl_tokens = pearls;
        self.gold_tokens = gold;
        self
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid(mut self, rows: u8, cols: u8) -> Self {
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    /// Set the pyramid slot counts for levels 1, 2 and 3.
    #[must_use]
    pub fn with_pyramid_slots(mut self, slots: [u8; 3]) -> Self {
        self.pyramid_slots = slots;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_standard_rules() {
        let config = RulesConfig::default();
        assert_eq!(config.points_to_win, 20);
        assert_eq!(config.crowns_to_win, 10);
        assert_eq!(config.color_points_to_win, 10);
        assert_eq!(config.token_limit, 10);
        assert_eq!(config.reserve_limit, 3);
        assert_eq!(config.privilege_total, 3);
        assert_eq!(config.royal_crown_thresholds.as_slice(), &[3, 6]);
        assert_eq!(config.pyramid_slots, [5, 4, 3]);
    }

    #[test]
    fn test_standard_pool_is_25_tokens() {
        let pool = RulesConfig::default().token_pool();
        assert_eq!(pool.total(), 25);
        assert_eq!(pool.get(Token::Gold), 3);
        assert_eq!(pool.get(Token::Pearl), 2);
        assert_eq!(pool.get(Token::Blue), 4);
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_points_to_win(5)
            .with_token_limit(4)
            .with_crown_thresholds([2])
            .with_token_pool(1, 0, 1)
            .with_grid(3, 3);

        assert_eq!(config.points_to_win, 5);
        assert_eq!(config.token_limit, 4);
        assert_eq!(config.royal_crown_thresholds.as_slice(), &[2]);
        assert_eq!(config.token_pool().total(), 6);
        assert_eq!((config.grid_rows, config.grid_cols), (3, 3));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RulesConfig::from_json(r#"{ "reserve_limit": 2, "grid_rows": 4 }"#).unwrap();
        assert_eq!(config.reserve_limit, 2);
        assert_eq!(config.grid_rows, 4);
        assert_eq!(config.grid_cols, 5);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RulesConfig::default().with_crown_thresholds([2, 4, 8]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RulesConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(RulesConfig::from_json("{ \"points_to_win\": -1 }").is_err());
    }
}
