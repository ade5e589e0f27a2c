//! Token kinds and fixed-size count tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// The five gem colours. Bonuses and card colours only use these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gem {
    Black,
    Red,
    Green,
    Blue,
    White,
}

impl Gem {
    /// All gems in table order.
    pub const ALL: [Gem; 5] = [Gem::Black, Gem::Red, Gem::Green, Gem::Blue, Gem::White];

    /// Position in `GemCounts` and `TokenCounts`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in catalog files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gem::Black => "black",
            Gem::Red => "red",
            Gem::Green => "green",
            Gem::Blue => "blue",
            Gem::White => "white",
        }
    }
}

impl fmt::Display for Gem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every kind of token in the pool. Gold is wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Black,
    Red,
    Green,
    Blue,
    White,
    Pearl,
    Gold,
}

impl Token {
    /// All kinds in table order.
    pub const ALL: [Token; 7] = [
        Token::Black,
        Token::Red,
        Token::Green,
        Token::Blue,
        Token::White,
        Token::Pearl,
        Token::Gold,
    ];

    /// Position in `TokenCounts`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The gem colour, if this is a gem token.
    #[must_use]
    pub const fn gem(self) -> Option<Gem> {
        match self {
            Token::Black => Some(Gem::Black),
            Token::Red => Some(Gem::Red),
            Token::Green => Some(Gem::Green),
            Token::Blue => Some(Gem::Blue),
            Token::White => Some(Gem::White),
            Token::Pearl | Token::Gold => None,
        }
    }

    #[must_use]
    pub const fn is_gold(self) -> bool {
        matches!(self, Token::Gold)
    }

    /// Lowercase name, as used in catalog files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Token::Pearl => "pearl",
            Token::Gold => "gold",
            Token::Black => "black",
            Token::Red => "red",
            Token::Green => "green",
            Token::Blue => "blue",
            Token::White => "white",
        }
    }
}

impl From<Gem> for Token {
    fn from(gem: Gem) -> Self {
        match gem {
            Gem::Black => Token::Black,
            Gem::Red => Token::Red,
            Gem::Green => Token::Green,
            Gem::Blue => Token::Blue,
            Gem::White => Token::White,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised token or gem name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown token kind `{0}`")]
pub struct ParseTokenError(pub String);

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTokenError(s.to_string()))
    }
}

impl FromStr for Gem {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Token>()
            .ok()
            .and_then(Token::gem)
            .ok_or_else(|| ParseTokenError(s.to_string()))
    }
}

/// Count per token kind.
///
/// Used for player hands, card costs, payments and conservation checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCounts([u8; 7]);

impl TokenCounts {
    /// Build from an explicit table in `Token::ALL` order.
    #[must_use]
    pub const fn from_array(counts: [u8; 7]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub fn get(&self, token: Token) -> u8 {
        self.0[token.index()]
    }

    pub fn add(&mut self, token: Token, n: u8) {
        self.0[token.index()] += n;
    }

    /// Remove `n` tokens of one kind. Returns `false`, changing nothing, if
    /// fewer are held.
    pub fn remove(&mut self, token: Token, n: u8) -> bool {
        let slot = &mut self.0[token.index()];
        if *slot < n {
            return false;
        }
        *slot -= n;
        true
    }

    pub fn add_all(&mut self, other: &TokenCounts) {
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a += b;
        }
    }

    /// Remove every token in `other`. All-or-nothing.
    pub fn remove_all(&mut self, other: &TokenCounts) -> bool {
        if !self.contains(other) {
            return false;
        }
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a -= b;
        }
        true
    }

    /// True if every kind is held at least as often as in `other`.
    #[must_use]
    pub fn contains(&self, other: &TokenCounts) -> bool {
        self.0.iter().zip(other.0).all(|(a, b)| *a >= b)
    }

    #[must_use]
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&n| u16::from(n)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// The gem part of the table (pearl and gold dropped).
    #[must_use]
    pub fn gems(&self) -> GemCounts {
        let mut gems = GemCounts::default();
        for gem in Gem::ALL {
            gems[gem] = self[Token::from(gem)];
        }
        gems
    }

    /// Non-zero entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, u8)> + '_ {
        Token::ALL
            .into_iter()
            .map(|t| (t, self.get(t)))
            .filter(|&(_, n)| n > 0)
    }

    /// One entry per physical token, in table order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.iter()
            .flat_map(|(t, n)| std::iter::repeat(t).take(usize::from(n)))
    }
}

impl Index<Token> for TokenCounts {
    type Output = u8;

    fn index(&self, token: Token) -> &u8 {
        &self.0[token.index()]
    }
}

impl IndexMut<Token> for TokenCounts {
    fn index_mut(&mut self, token: Token) -> &mut u8 {
        &mut self.0[token.index()]
    }
}

impl FromIterator<Token> for TokenCounts {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut counts = Self::default();
        for token in iter {
            counts.add(token, 1);
        }
        counts
    }
}

impl fmt::Display for TokenCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        let mut first = true;
        for (token, n) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{n} {token}")?;
            first = false;
        }
        Ok(())
    }
}

/// Count per gem colour (card bonuses).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemCounts([u8; 5]);

impl GemCounts {
    #[must_use]
    pub fn get(&self, gem: Gem) -> u8 {
        self.0[gem.index()]
    }

    pub fn add(&mut self, gem: Gem, n: u8) {
        self.0[gem.index()] += n;
    }

    #[must_use]
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&n| u16::from(n)).sum()
    }

    /// Colours with at least one count.
    pub fn owned(&self) -> impl Iterator<Item = Gem> + '_ {
        Gem::ALL.into_iter().filter(|&g| self.get(g) > 0)
    }
}

impl Index<Gem> for GemCounts {
    type Output = u8;

    fn index(&self, gem: Gem) -> &u8 {
        &self.0[gem.index()]
    }
}

impl IndexMut<Gem> for GemCounts {
    fn index_mut(&mut self, gem: Gem) -> &mut u8 {
        &mut self.0[gem.index()]
    }
}
