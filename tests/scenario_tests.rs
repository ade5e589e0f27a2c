//! End-to-end scenarios through the public API.

use duel_engine::board::PrivilegeGrant;
use duel_engine::cards::Level;
use duel_engine::core::{IllegalAction, PlayerId, RulesConfig};
use duel_engine::game::{new_game, Game, GameBuilder};
use duel_engine::rules::{Action, Continuation, GameEvent, Phase};
use duel_engine::tokens::Token;

/// The longest token line on offer, if any.
fn longest_take(game: &Game) -> Option<Action> {
    game.legal_actions()
        .into_iter()
        .filter(|a| matches!(a, Action::TakeTokens { .. }))
        .max_by_key(|a| match a {
            Action::TakeTokens { cells } => cells.len(),
            _ => 0,
        })
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_fresh_game_layout() {
    for seed in [0, 1, 42, 9001] {
        let game = new_game(seed);
        let board = game.board();

        assert_eq!(board.pyramid().sizes(), [5, 4, 3]);
        assert_eq!(board.grid().counts().total(), 25);
        assert_eq!(board.grid().empty_cells(), 0);
        assert!(board.bag().is_empty());
        assert_eq!(board.grid().counts(), game.config().token_pool());
        assert_eq!(board.deck(Level::One).len() + 5, 30);
        assert_eq!(board.deck(Level::Two).len() + 4, 24);
        assert_eq!(board.deck(Level::Three).len() + 3, 13);
        assert_eq!(board.royals().len(), 4);
        assert_eq!(game.privilege_total(), 3);
    }
}

#[test]
fn test_same_seed_same_game() {
    let a = new_game(77);
    let b = new_game(77);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.active_player(), b.active_player());
    assert_eq!(a.legal_actions(), b.legal_actions());
}

// =============================================================================
// Purchasing
// =============================================================================

#[test]
fn test_empty_handed_purchase_is_insufficient() {
    let mut game = GameBuilder::new().with_first_player(PlayerId::FIRST).build(8);
    let cards: Vec<_> = game.board().pyramid().cards().collect();

    for id in cards {
        let card = game.card(id).unwrap().clone();
        assert!(card.cost.total() > 0);
        if card.is_joker() {
            continue;
        }
        assert_eq!(
            game.apply(&Action::PurchaseCard { card: id, bonus: None }),
            Err(IllegalAction::InsufficientFunds),
            "{id}"
        );
    }
    assert!(game.history().is_empty());
}

// =============================================================================
// Token Lines
// =============================================================================

#[test]
fn test_three_of_a_kind_grants_opponent_privilege() {
    let (mut game, line) = (0..500)
        .find_map(|seed| {
            let game = new_game(seed);
            let line = game.legal_actions().into_iter().find(|action| match action {
                Action::TakeTokens { cells } => {
                    let kinds: Vec<_> = cells.iter().filter_map(|&c| game.board().grid().get(c)).collect();
                    kinds.len() == 3 && kinds.iter().all(|&t| t == kinds[0])
                }
                _ => false,
            })?;
            Some((game, line))
        })
        .expect("some seed lays three of a kind in a line");

    let player = game.active_player();
    let opponent = player.opponent();
    let before = game.player(opponent).privileges();

    let delta = game.apply(&line).unwrap();
    assert!(delta.events.contains(&GameEvent::PrivilegeGranted {
        player: opponent,
        grant: PrivilegeGrant::FromPool,
    }));
    assert_eq!(game.player(opponent).privileges(), before + 1);
    assert_eq!(game.player(player).token_count(), 3);
}

#[test]
fn test_plain_line_grants_nothing() {
    let mut game = new_game(3);
    let opponent = game.active_player().opponent();
    let single = game
        .legal_actions()
        .into_iter()
        .find(|a| matches!(a, Action::TakeTokens { cells } if cells.len() == 1))
        .unwrap();

    let delta = game.apply(&single).unwrap();
    assert!(!delta
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PrivilegeGranted { .. })));
    assert_eq!(game.player(opponent).privileges(), 1);
}

#[test]
fn test_gold_is_never_in_a_line() {
    let game = new_game(12);
    let gold = game.board().grid().first_of(Token::Gold).unwrap();
    for action in game.legal_actions() {
        if let Action::TakeTokens { cells } = action {
            assert!(!cells.contains(&gold));
        }
    }
}

// =============================================================================
// Hand Limit
// =============================================================================

#[test]
fn test_hand_limit_with_small_limit() {
    let config = RulesConfig::default().with_token_limit(2);
    let mut game = GameBuilder::new()
        .with_config(config)
        .with_first_player(PlayerId::FIRST)
        .build(4);

    let take = longest_take(&game).unwrap();
    let delta = game.apply(&take).unwrap();
    assert_eq!(
        delta.continuation,
        Continuation::Continue {
            phase: Phase::Discard { excess: 1 }
        }
    );

    let discards = game.legal_actions();
    assert_eq!(discards.len(), game.player(PlayerId::FIRST).tokens().iter().count());

    let delta = game.apply(&discards[0]).unwrap();
    assert_eq!(delta.continuation, Continuation::EndTurn { next: PlayerId::SECOND });
    assert_eq!(game.player(PlayerId::FIRST).token_count(), 2);
    assert_eq!(game.board().bag().len(), 1);
}

#[test]
fn test_greedy_hoarding_forces_discard_to_ten() {
    let mut game = new_game(31);

    for _ in 0..100 {
        if let Phase::Discard { excess } = game.phase() {
            let player = game.active_player();
            let held = game.player(player).token_count();
            assert_eq!(held - u16::from(excess), 10);

            let discards = game.legal_actions();
            assert!(!discards.is_empty());
            for discard in &discards {
                let mut branch = game.clone();
                branch.apply(discard).unwrap();
                assert_eq!(branch.player(player).token_count(), 10);
            }
            return;
        }

        let action = longest_take(&game)
            .or_else(|| game.legal_actions().into_iter().next())
            .unwrap();
        game.apply(&action).unwrap();
    }
    panic!("nobody went over the hand limit");
}
