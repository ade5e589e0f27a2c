//! Per-player holdings.
//!
//! Fields are crate-visible so the resolver can move things between
//! players and the board; everything outside the crate reads through the
//! accessors.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::payment;
use crate::cards::{CardDef, CardId, RoyalCard, RoyalId};
use crate::core::{RulesConfig, RulesResult};
use crate::tokens::{Gem, GemCounts, TokenCounts};

/// A purchased card with its colour fixed at purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedCard {
    pub card: CardId,
    /// Gem group the card counts toward. `None` for points cards.
    pub color: Option<Gem>,
    pub points: u8,
}

/// Which victory condition was met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victory {
    Points,
    Crowns,
    Color(Gem),
}

impl fmt::Display for Victory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Victory::Points => f.write_str("prestige points"),
            Victory::Crowns => f.write_str("crowns"),
            Victory::Color(gem) => write!(f, "{gem} card points"),
        }
    }
}

/// Everything one player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) tokens: TokenCounts,
    pub(crate) bonuses: GemCounts,
    pub(crate) reserved: SmallVec<[CardId; 3]>,
    pub(crate) purchased: Vector<OwnedCard>,
    pub(crate) royals: SmallVec<[RoyalId; 2]>,
    pub(crate) privileges: u8,
    pub(crate) crowns: u8,
    pub(crate) points: u16,
    /// Crown thresholds already rewarded with a royal.
    pub(crate) crown_milestones: SmallVec<[u8; 2]>,
}

impl PlayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenCounts {
        &self.tokens
    }

    #[must_use]
    pub fn bonuses(&self) -> &GemCounts {
        &self.bonuses
    }

    #[must_use]
    pub fn reserved(&self) -> &[CardId] {
        &self.reserved
    }

    #[must_use]
    pub fn purchased(&self) -> &Vector<OwnedCard> {
        &self.purchased
    }

    #[must_use]
    pub fn royals(&self) -> &[RoyalId] {
        &self.royals
    }

    #[must_use]
    pub fn privileges(&self) -> u8 {
        self.privileges
    }

    #[must_use]
    pub fn crowns(&self) -> u8 {
        self.crowns
    }

    #[must_use]
    pub fn points(&self) -> u16 {
        self.points
    }

    #[must_use]
    pub fn token_count(&self) -> u16 {
        self.tokens.total()
    }

    /// Tokens above `limit`.
    #[must_use]
    pub fn excess_tokens(&self, limit: u8) -> u16 {
        self.token_count().saturating_sub(u16::from(limit))
    }

    /// Price of `card` for this player after bonuses.
    #[must_use]
    pub fn owed(&self, card: &CardDef) -> TokenCounts {
        payment::owed(&card.cost, &self.bonuses)
    }

    /// Tokens this player would spend on `card`.
    pub fn payment_for(&self, card: &CardDef) -> RulesResult<TokenCounts> {
        payment::payment_for(&self.tokens, &self.owed(card))
    }

    #[must_use]
    pub fn can_afford(&self, card: &CardDef) -> bool {
        self.payment_for(card).is_ok()
    }

    /// Record a purchase. `color` is the resolved gem group: the printed
    /// colour, the copied colour of a joker, or `None` for points cards.
    ///
    /// Returns the crown thresholds reached for the first time.
    pub fn acquire(&mut self, card: &CardDef, color: Option<Gem>, thresholds: &[u8]) -> SmallVec<[u8; 2]> {
        if let Some(gem) = color {
            self.bonuses.add(gem, card.bonus);
        }
        self.purchased.push_back(OwnedCard {
            card: card.id,
            color,
            points: card.points,
        });
        self.points += u16::from(card.points);
        self.crowns += card.crowns;

        let mut reached = SmallVec::new();
        for &threshold in thresholds {
            if self.crowns >= threshold && !self.crown_milestones.contains(&threshold) {
                self.crown_milestones.push(threshold);
                reached.push(threshold);
            }
        }
        reached
    }

    /// Record a royal card. Its points count toward the total only.
    pub fn add_royal(&mut self, royal: &RoyalCard) {
        self.royals.push(royal.id);
        self.points += u16::from(royal.points);
    }

    /// Points on purchased cards of one gem group.
    #[must_use]
    pub fn color_points(&self, gem: Gem) -> u16 {
        self.purchased
            .iter()
            .filter(|c| c.color == Some(gem))
            .map(|c| u16::from(c.points))
            .sum()
    }

    /// The richest gem group, first in gem order on ties.
    #[must_use]
    pub fn best_color_points(&self) -> Option<(Gem, u16)> {
        Gem::ALL
            .into_iter()
            .map(|gem| (gem, self.color_points(gem)))
            .filter(|&(_, points)| points > 0)
            .fold(None, |best, (gem, points)| match best {
                Some((_, top)) if top >= points => best,
                _ => Some((gem, points)),
            })
    }

    /// The first victory condition met, checked points, crowns, colour.
    #[must_use]
    pub fn victory(&self, config: &RulesConfig) -> Option<Victory> {
        if self.points >= config.points_to_win {
            return Some(Victory::Points);
        }
        if self.crowns >= config.crowns_to_win {
            return Some(Victory::Crowns);
        }
        self.best_color_points()
            .filter(|&(_, points)| points >= config.color_points_to_win)
            .map(|(gem, _)| Victory::Color(gem))
    }
}
