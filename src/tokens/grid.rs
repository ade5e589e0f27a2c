//! The token grid.
//!
//! ## Layout
//!
//! Tokens are placed from the bag in spiral order: centre first, then down,
//! left, up, right with run lengths 1, 1, 2, 2, 3, 3, ... Coordinates that
//! fall off the grid are skipped, so the order visits every cell exactly
//! once on any grid size.
//!
//! ## Lines
//!
//! A legal selection is 1 to 3 non-gold tokens in adjacent cells along one
//! axis: horizontal, vertical, diagonal or anti-diagonal. Cells are always
//! handled in canonical `(row, col)` order, so `[c, b, a]` and `[a, b, c]`
//! select the same line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::{Token, TokenCounts};
use crate::core::{IllegalAction, RulesResult};

/// A grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    fn offset(self, (dr, dc): (i8, i8)) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Forward steps of the four line axes. Each moves to a larger `Cell`.
pub const LINE_STEPS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

const SPIRAL_TURNS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// A line of cells in canonical order.
pub type Line = SmallVec<[Cell; 3]>;

/// Result of removing a line of tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakenLine {
    pub cells: Line,
    pub tokens: TokenCounts,
    /// Three tokens of one colour, or both pearls. The caller owes the
    /// opponent a privilege.
    pub grants_opponent_privilege: bool,
}

/// A rectangular grid of cells, each empty or holding one token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenGrid {
    rows: u8,
    cols: u8,
    cells: Vec<Option<Token>>,
}

impl TokenGrid {
    /// An empty grid.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; usize::from(rows) * usize::from(cols)],
        }
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| usize::from(cell.row) * usize::from(self.cols) + usize::from(cell.col))
    }

    /// The token in a cell. `None` for empty or out-of-bounds cells.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Token> {
        self.slot(cell).and_then(|i| self.cells[i])
    }

    /// All cells in row-major order with their contents.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Token>)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &token)| {
            let row = (i / usize::from(cols)) as u8;
            let col = (i % usize::from(cols)) as u8;
            (Cell::new(row, col), token)
        })
    }

    /// Cells holding a given token kind, row-major.
    pub fn cells_of(&self, token: Token) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(move |&(_, t)| t == Some(token))
            .map(|(cell, _)| cell)
    }

    #[must_use]
    pub fn first_of(&self, token: Token) -> Option<Cell> {
        self.cells_of(token).next()
    }

    #[must_use]
    pub fn has_gold(&self) -> bool {
        self.first_of(Token::Gold).is_some()
    }

    /// True if at least one non-gold token is on the grid.
    #[must_use]
    pub fn has_non_gold(&self) -> bool {
        self.cells.iter().flatten().any(|t| !t.is_gold())
    }

    /// Token totals on the grid.
    #[must_use]
    pub fn counts(&self) -> TokenCounts {
        self.cells.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Every cell in spiral placement order.
    #[must_use]
    pub fn spiral(&self) -> Vec<Cell> {
        let total = self.cells.len();
        let mut order = Vec::with_capacity(total);
        if total == 0 {
            return order;
        }

        let (mut r, mut c) = (i16::from(self.rows / 2), i16::from(self.cols / 2));
        order.push(Cell::new(r as u8, c as u8));

        let mut run = 1;
        let mut turn = 0;
        while order.len() < total {
            for _ in 0..2 {
                let (dr, dc) = SPIRAL_TURNS[turn % 4];
                for _ in 0..run {
                    r += i16::from(dr);
                    c += i16::from(dc);
                    if (0..i16::from(self.rows)).contains(&r) && (0..i16::from(self.cols)).contains(&c) {
                        order.push(Cell::new(r as u8, c as u8));
                    }
                }
                turn += 1;
            }
            run += 1;
        }
        order
    }

    /// Place tokens into empty cells in spiral order. Returns whatever did
    /// not fit.
    pub fn place_spiral(&mut self, tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
        let mut tokens = tokens.into_iter();
        for cell in self.spiral() {
            let Some(slot) = self.slot(cell) else { continue };
            if self.cells[slot].is_some() {
                continue;
            }
            match tokens.next() {
                Some(token) => self.cells[slot] = Some(token),
                None => return Vec::new(),
            }
        }
        tokens.collect()
    }

    /// Validate a line selection without touching the grid.
    ///
    /// Checks, in order: 1 to 3 distinct cells (`NotAdjacentLine`), no gold
    /// (`IncludesGold`), every cell holds a token (`NotOwnedOrAvailable`),
    /// cells are adjacent along one axis (`NotAdjacentLine`).
    pub fn check_line(&self, cells: &[Cell]) -> RulesResult<Line> {
        let mut line: Line = cells.iter().copied().collect();
        line.sort_unstable();
        line.dedup();
        if line.is_empty() || line.len() > 3 || line.len() != cells.len() {
            return Err(IllegalAction::NotAdjacentLine);
        }

        if line.iter().any(|&c| self.get(c) == Some(Token::Gold)) {
            return Err(IllegalAction::IncludesGold);
        }
        if line.iter().any(|&c| self.get(c).is_none()) {
            return Err(IllegalAction::NotOwnedOrAvailable);
        }

        if let [first, rest @ ..] = line.as_slice() {
            if let Some(second) = rest.first() {
                let step = (
                    i16::from(second.row) - i16::from(first.row),
                    i16::from(second.col) - i16::from(first.col),
                );
                let on_axis = LINE_STEPS
                    .iter()
                    .any(|&(dr, dc)| (i16::from(dr), i16::from(dc)) == step);
                let contiguous = line.windows(2).all(|w| {
                    (
                        i16::from(w[1].row) - i16::from(w[0].row),
                        i16::from(w[1].col) - i16::from(w[0].col),
                    ) == step
                });
                if !on_axis || !contiguous {
                    return Err(IllegalAction::NotAdjacentLine);
                }
            }
        }

        Ok(line)
    }

    /// Remove a validated line of tokens.
    pub fn take_line(&mut self, cells: &[Cell]) -> RulesResult<TakenLine> {
        let line = self.check_line(cells)?;
        let mut tokens = TokenCounts::default();
        for &cell in &line {
            if let Some(slot) = self.slot(cell) {
                if let Some(token) = self.cells[slot].take() {
                    tokens.add(token, 1);
                }
            }
        }

        let three_of_a_kind = line.len() == 3 && tokens.iter().count() == 1;
        let two_pearls = tokens[Token::Pearl] >= 2;

        Ok(TakenLine {
            cells: line,
            tokens,
            grants_opponent_privilege: three_of_a_kind || two_pearls,
        })
    }

    /// Remove a gold token for a reservation.
    pub fn take_gold(&mut self, cell: Cell) -> RulesResult<Token> {
        if !self.has_gold() {
            return Err(IllegalAction::NoGoldOnBoard);
        }
        self.take_exact(cell, Token::Gold)
    }

    /// Remove any single non-gold token (privilege use).
    pub fn take_single(&mut self, cell: Cell) -> RulesResult<Token> {
        match self.get(cell) {
            None => Err(IllegalAction::NotOwnedOrAvailable),
            Some(Token::Gold) => Err(IllegalAction::IncludesGold),
            Some(token) => self.take_exact(cell, token),
        }
    }

    /// Remove the token in `cell` if it is exactly `token`.
    pub fn take_exact(&mut self, cell: Cell, token: Token) -> RulesResult<Token> {
        match self.slot(cell) {
            Some(slot) if self.cells[slot] == Some(token) => {
                self.cells[slot] = None;
                Ok(token)
            }
            _ => Err(IllegalAction::NotOwnedOrAvailable),
        }
    }

    /// Every legal line selection, each in canonical order.
    ///
    /// Ordered by first cell (row-major), then single cell before the
    /// two- and three-cell lines of each axis.
    #[must_use]
    pub fn legal_lines(&self) -> Vec<Line> {
        let takeable = |cell: Option<Cell>| {
            cell.filter(|&c| matches!(self.get(c), Some(t) if !t.is_gold()))
        };

        let mut lines = Vec::new();
        for (start, token) in self.iter() {
            if !matches!(token, Some(t) if !t.is_gold()) {
                continue;
            }
            lines.push(Line::from_slice(&[start]));
            for step in LINE_STEPS {
                let Some(second) = takeable(start.offset(step)) else { continue };
                lines.push(Line::from_slice(&[start, second]));
                if let Some(third) = takeable(second.offset(step)) {
                    lines.push(Line::from_slice(&[start, second, third]));
                }
            }
        }
        lines
    }

    /// Test support: put a token straight into a cell.
    #[cfg(test)]
    pub(crate) fn set(&mut self, cell: Cell, token: Option<Token>) {
        if let Some(slot) = self.slot(cell) {
            self.cells[slot] = token;
        }
    }
}

impl fmt::Display for TokenGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let glyph = match self.get(Cell::new(row, col)) {
                    None => '.',
                    Some(Token::Black) => 'K',
                    Some(Token::Red) => 'R',
                    Some(Token::Green) => 'G',
                    Some(Token::Blue) => 'B',
                    Some(Token::White) => 'W',
                    Some(Token::Pearl) => 'P',
                    Some(Token::Gold) => '$',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
