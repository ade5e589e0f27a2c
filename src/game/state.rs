//! The complete game: shared board, both players, turn state and history.

use std::sync::Arc;

use im::Vector;

use crate::board::Board;
use crate::cards::{CardCatalog, CardDef, CardId};
use crate::core::{GameRng, IllegalAction, PlayerId, PlayerPair, RulesConfig, RulesResult};
use crate::player::PlayerState;
use crate::rules::{Action, ActionRecord, GameResult, Phase, RulesEngine, StateDelta, TurnState};
use crate::tokens::TokenCounts;

/// A running game.
///
/// Cloning is cheap: the catalog and configuration are shared, and the
/// history and purchased cards live in persistent `im` vectors, so search
/// code can branch freely.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: Arc<RulesConfig>,
    pub(crate) catalog: Arc<CardCatalog>,
    pub(crate) board: Board,
    pub(crate) players: PlayerPair<PlayerState>,
    pub(crate) turn: TurnState,
    pub(crate) status: Option<GameResult>,
    pub(crate) history: Vector<ActionRecord>,
    /// Bag draws after setup.
    pub(crate) rng: GameRng,
}

impl Game {
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    /// Every action applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// `Some` once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.and_then(|result| result.winner())
    }

    /// Look up a card definition.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardDef> {
        self.catalog.get(id)
    }

    /// Tokens on the grid, in the bag and in both hands.
    ///
    /// Always equals `config().token_pool()`.
    #[must_use]
    pub fn token_totals(&self) -> TokenCounts {
        let mut totals = self.board.token_totals();
        for (_, player) in self.players.iter() {
            totals.add_all(&player.tokens);
        }
        totals
    }

    /// Privileges in the pool plus both players'.
    ///
    /// Always equals `config().privilege_total`.
    #[must_use]
    pub fn privilege_total(&self) -> u8 {
        self.players
            .iter()
            .fold(self.board.privileges, |sum, (_, p)| sum + p.privileges)
    }

    /// Branch the game with an independent bag stream.
    ///
    /// Advances this game's fork counter, so repeated forks differ.
    #[must_use]
    pub fn fork(&mut self) -> Game {
        let mut branch = self.clone();
        branch.rng = self.rng.fork();
        branch
    }

    /// Card definition for the resolver. Ids on the board always resolve.
    pub(crate) fn card_def(&self, id: CardId) -> RulesResult<CardDef> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or(IllegalAction::NotOwnedOrAvailable)
    }
}

impl RulesEngine for Game {
    fn active_player(&self) -> PlayerId {
        Game::active_player(self)
    }

    fn legal_actions(&self) -> Vec<Action> {
        Game::legal_actions(self)
    }

    fn apply_action(&mut self, action: &Action) -> RulesResult<StateDelta> {
        self.apply(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        Game::is_terminal(self)
    }
}
