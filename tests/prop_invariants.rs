//! Property tests: random playouts keep the game's conservation laws.
//!
//! Run more cases with: PROPTEST_CASES=2000 cargo test --release prop_invariants

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use duel_engine::cards::Level;
use duel_engine::core::{GameRng, PlayerId};
use duel_engine::game::{new_game, Game};
use duel_engine::rules::{Action, Phase};
use duel_engine::tokens::{Cell, Token};

const STANDARD_CARDS: usize = 67;

fn card_count(game: &Game) -> usize {
    let board = game.board();
    let decks: usize = Level::ALL.into_iter().map(|l| board.deck(l).len()).sum();
    let held: usize = PlayerId::both()
        .into_iter()
        .map(|p| game.player(p).reserved().len() + game.player(p).purchased().len())
        .sum();
    board.pyramid().cards().count() + decks + held
}

fn check_invariants(game: &Game) -> Result<(), TestCaseError> {
    prop_assert_eq!(game.token_totals(), game.config().token_pool());
    prop_assert_eq!(game.privilege_total(), game.config().privilege_total);
    prop_assert_eq!(card_count(game), STANDARD_CARDS);
    prop_assert_eq!(game.history().len() as u32, game.turn().sequence());

    let royals: usize = PlayerId::both()
        .into_iter()
        .map(|p| game.player(p).royals().len())
        .sum();
    prop_assert_eq!(royals + game.board().royals().len(), 4);

    // Only the active player can be over the limit, and only mid-turn.
    let waiting = game.player(game.active_player().opponent());
    prop_assert!(waiting.token_count() <= u16::from(game.config().token_limit));
    let fresh_turn = game
        .history()
        .last()
        .map_or(true, |record| record.turn != game.turn().turn_number());
    if fresh_turn {
        prop_assert_eq!(game.phase(), Phase::StartOfRound);
        let active = game.player(game.active_player());
        prop_assert!(active.token_count() <= u16::from(game.config().token_limit));
    }

    for player in PlayerId::both() {
        let hand = game.player(player);
        prop_assert!(hand.reserved().len() <= usize::from(game.config().reserve_limit));
        for card in game.catalog().iter() {
            let owed = hand.owed(card);
            prop_assert!(card.cost.contains(&owed));
            prop_assert_eq!(owed[Token::Pearl], card.cost[Token::Pearl]);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Random legal play never breaks conservation or the hand limit.
    #[test]
    fn prop_random_playout_invariants(seed in any::<u64>(), steps in 1usize..250) {
        let mut game = new_game(seed);
        let mut rng = GameRng::new(seed ^ 0x5eed);
        check_invariants(&game)?;

        for _ in 0..steps {
            let actions = game.legal_actions();
            if actions.is_empty() {
                prop_assert!(game.is_terminal().is_some());
                break;
            }
            let action = rng.choose(&actions).unwrap().clone();
            let delta = game.apply(&action);
            prop_assert!(delta.is_ok(), "{:?} listed but rejected: {:?}", action, delta);
            check_invariants(&game)?;
        }
    }

    /// An action outside the legal list never changes the game.
    #[test]
    fn prop_rejected_actions_change_nothing(seed in any::<u64>(), cell in 0u8..25) {
        let mut game = new_game(seed);
        let action = Action::UsePrivilege { cell: Cell::new(cell / 5, cell % 5) };
        if !game.legal_actions().contains(&action) {
            let before = game.clone();
            prop_assert!(game.apply(&action).is_err());
            prop_assert_eq!(game.board(), before.board());
            prop_assert_eq!(game.players(), before.players());
            prop_assert!(game.history().is_empty());
        }
    }

    /// Same seed and same choices give the same game.
    #[test]
    fn prop_replay_is_deterministic(seed in any::<u64>(), steps in 1usize..80) {
        let play = |seed: u64| {
            let mut game = new_game(seed);
            let mut rng = GameRng::new(seed);
            for _ in 0..steps {
                let actions = game.legal_actions();
                let Some(action) = rng.choose(&actions).cloned() else { break };
                game.apply(&action).unwrap();
            }
            game
        };
        let (a, b) = (play(seed), play(seed));
        prop_assert_eq!(a.board(), b.board());
        prop_assert_eq!(a.players(), b.players());
        prop_assert_eq!(a.turn(), b.turn());
    }
}
