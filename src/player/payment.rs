//! Card prices after bonuses, and what a hand pays for them.
//!
//! Gem costs drop by the matching bonus, never below zero. Pearl costs are
//! never reduced. Gold is never owed; it covers the summed shortfall of
//! every other kind, one for one.

use crate::core::{IllegalAction, RulesResult};
use crate::tokens::{Gem, GemCounts, Token, TokenCounts};

/// What is still owed for `cost` once `bonuses` are applied.
#[must_use]
pub fn owed(cost: &TokenCounts, bonuses: &GemCounts) -> TokenCounts {
    let mut owed = *cost;
    for gem in Gem::ALL {
        let token = Token::from(gem);
        owed[token] = cost[token].saturating_sub(bonuses[gem]);
    }
    owed[Token::Gold] = 0;
    owed
}

/// The exact tokens `hand` spends on `owed`: matching tokens first, gold
/// for the rest.
pub fn payment_for(hand: &TokenCounts, owed: &TokenCounts) -> RulesResult<TokenCounts> {
    let mut payment = TokenCounts::default();
    let mut shortfall: u16 = 0;

    for (token, due) in owed.iter().filter(|&(t, _)| !t.is_gold()) {
        let paid = due.min(hand[token]);
        payment[token] = paid;
        shortfall += u16::from(due - paid);
    }

    if shortfall > u16::from(hand[Token::Gold]) {
        return Err(IllegalAction::InsufficientFunds);
    }
    // Bounded by the gold held, which fits in a u8.
    payment[Token::Gold] = shortfall as u8;
    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonuses(pairs: &[(Gem, u8)]) -> GemCounts {
        let mut b = GemCounts::default();
        for &(gem, n) in pairs {
            b.add(gem, n);
        }
        b
    }

    #[test]
    fn test_bonus_reduces_matching_gem_only() {
        let cost = TokenCounts::from_array([0, 3, 1, 0, 0, 0, 0]);
        let due = owed(&cost, &bonuses(&[(Gem::Red, 2), (Gem::Blue, 4)]));
        assert_eq!(due, TokenCounts::from_array([0, 1, 1, 0, 0, 0, 0]));
    }

    #[test]
    fn test_owed_never_negative() {
        let cost = TokenCounts::from_array([1, 0, 0, 0, 0, 0, 0]);
        let due = owed(&cost, &bonuses(&[(Gem::Black, 5)]));
        assert!(due.is_empty());
    }

    #[test]
    fn test_pearl_never_reduced() {
        let cost = TokenCounts::from_array([0, 0, 0, 0, 0, 2, 0]);
        let all = bonuses(&[
            (Gem::Black, 3),
            (Gem::Red, 3),
            (Gem::Green, 3),
            (Gem::Blue, 3),
            (Gem::White, 3),
        ]);
        assert_eq!(owed(&cost, &all)[Token::Pearl], 2);
    }

    #[test]
    fn test_exact_payment() {
        let hand = TokenCounts::from_array([2, 1, 0, 0, 0, 1, 1]);
        let due = TokenCounts::from_array([2, 1, 0, 0, 0, 1, 0]);
        assert_eq!(payment_for(&hand, &due), Ok(due));
    }

    #[test]
    fn test_gold_covers_summed_shortfall() {
        let hand = TokenCounts::from_array([1, 0, 0, 0, 0, 0, 2]);
        let due = TokenCounts::from_array([2, 1, 0, 0, 0, 0, 0]);
        assert_eq!(
            payment_for(&hand, &due),
            Ok(TokenCounts::from_array([1, 0, 0, 0, 0, 0, 2]))
        );
    }

    #[test]
    fn test_gold_covers_pearl() {
        let hand = TokenCounts::from_array([0, 0, 0, 0, 0, 0, 1]);
        let due = TokenCounts::from_array([0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(
            payment_for(&hand, &due),
            Ok(TokenCounts::from_array([0, 0, 0, 0, 0, 0, 1]))
        );
    }

    #[test]
    fn test_insufficient_funds() {
        let hand = TokenCounts::from_array([1, 0, 0, 0, 0, 0, 1]);
        let due = TokenCounts::from_array([3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(payment_for(&hand, &due), Err(IllegalAction::InsufficientFunds));
        assert_eq!(
            payment_for(&TokenCounts::default(), &TokenCounts::from_array([0, 0, 1, 0, 0, 0, 0])),
            Err(IllegalAction::InsufficientFunds)
        );
    }

    #[test]
    fn test_free_card_costs_nothing() {
        assert_eq!(
            payment_for(&TokenCounts::default(), &TokenCounts::default()),
            Ok(TokenCounts::default())
        );
    }
}
