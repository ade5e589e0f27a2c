//! Seeded randomness.
//!
//! A game owns exactly one `GameRng` and draws from nothing else. Setup
//! derives three independent streams from the root seed:
//!
//! | Stream                 | Used for                         |
//! |------------------------|----------------------------------|
//! | `Stream::Decks`        | shuffling the three level decks  |
//! | `Stream::FirstPlayer`  | the opening coin flip            |
//! | `Stream::Bag`          | every draw from the bag          |
//!
//! Drawing more or fewer times from the bag therefore never moves the deck
//! order. `fork` hands a search branch its own bag stream.
//!
//! ```
//! use duel_engine::core::{GameRng, Stream};
//!
//! let root = GameRng::new(42);
//! let mut a = root.stream(Stream::Bag);
//! let mut b = GameRng::new(42).stream(Stream::Bag);
//! assert_eq!(a.below(25), b.below(25));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Golden-ratio increment between fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Named sub-streams of a game seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    Decks,
    FirstPlayer,
    Bag,
}

impl Stream {
    fn tag(self) -> &'static str {
        match self {
            Stream::Decks => "decks",
            Stream::FirstPlayer => "first-player",
            Stream::Bag => "bag",
        }
    }
}

/// ChaCha8 generator that remembers its seed, so it can derive streams,
/// fork, and be checkpointed by word position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GameRngState", from = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// An independent generator for `stream`. Depends only on the seed, not
    /// on how far `self` has advanced.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Self {
        // FxHasher is stable across toolchains, unlike the std default hasher.
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        stream.tag().hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A new branch; successive forks of the same generator differ.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }

    /// Fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform pick, `None` on an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng.forks = state.forks;
        rng
    }
}

/// Checkpoint of a `GameRng`: seed plus ChaCha word position, constant size
/// however many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub forks: u64,
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        GameRng::from_state(&state)
    }
}
