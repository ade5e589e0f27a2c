//! Building a new game.

use std::sync::Arc;

use im::Vector;

use super::Game;
use crate::board::Board;
use crate::cards::CardCatalog;
use crate::core::{GameRng, PlayerId, PlayerPair, RulesConfig, Stream};
use crate::player::PlayerState;
use crate::rules::TurnState;

/// Builder for a game.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{PlayerId, RulesConfig};
/// use duel_engine::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .with_config(RulesConfig::default().with_points_to_win(15))
///     .with_first_player(PlayerId::SECOND)
///     .build(42);
///
/// assert_eq!(game.active_player(), PlayerId::SECOND);
/// assert_eq!(game.player(PlayerId::FIRST).privileges(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: RulesConfig,
    catalog: Arc<CardCatalog>,
    first_player: Option<PlayerId>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
            catalog: Arc::new(CardCatalog::standard()),
            first_player: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Share a catalog between many games.
    #[must_use]
    pub fn with_shared_catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fix the first player instead of drawing one from the seed.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Set up the board and hand the second player its starting privilege.
    ///
    /// Deck order, bag draws and the first player come from separate
    /// streams of `seed`, so fixing the first player leaves the board as
    /// it would otherwise be.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        let root = GameRng::new(seed);
        let mut deck_rng = root.stream(Stream::Decks);
        let mut rng = root.stream(Stream::Bag);
        let first = self.first_player.unwrap_or_else(|| {
            if root.stream(Stream::FirstPlayer).coin_flip() {
                PlayerId::SECOND
            } else {
                PlayerId::FIRST
            }
        });

        let board = Board::setup(&self.config, &self.catalog, &mut deck_rng, &mut rng);
        let mut game = Game {
            config: Arc::new(self.config),
            catalog: self.catalog,
            board,
            players: PlayerPair::new(|_| PlayerState::new()),
            turn: TurnState::new(first),
            status: None,
            history: Vector::new(),
            rng,
        };

        let second = first.opponent();
        let (to, other) = game.players.split_mut(second);
        let grant = game.board.grant_privilege(to, other);
        log::debug!("new game with seed {seed}: {first} starts, {second} privilege {grant:?}");
        game
    }
}

/// A standard game from a seed.
#[must_use]
pub fn new_game(seed: u64) -> Game {
    GameBuilder::new().build(seed)
}
