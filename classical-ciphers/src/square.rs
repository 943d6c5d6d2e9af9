//! Square construction
//!
//! Builds the n×n grids behind Polybius, Wheatstone and Magic-Square:
//! keyword-derived character squares with a configurable fill for the
//! trailing cells, literal character squares, and validated integer squares.

use crate::alphabet::{fold, Alphabet};
use crate::error::{CipherError, Result};

/// Sentinel for an unoccupied trailing cell in a [`Fill::Blank`] square.
const BLANK: char = ' ';

/// How the trailing cells of a keyword square are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Leave trailing cells blank (Polybius).
    Blank,
    /// Fill trailing cells with the digits `1`, `2`, ... (Wheatstone).
    Digits,
}

/// Smallest n with n*n >= len.
fn square_side(len: usize) -> usize {
    let mut n = 1;
    while n * n < len {
        n += 1;
    }
    n
}

/// An n×n character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSquare {
    size: usize,
    cells: Vec<char>,
}

impl CharSquare {
    /// Builds a keyword square over `alphabet`.
    ///
    /// The folded keyword is prepended to the remaining alphabet characters
    /// and the result is laid out row-major in the smallest square that
    /// holds it. Duplicate keyword characters and keyword characters outside
    /// the alphabet are errors. With [`Fill::Digits`] at most nine trailing
    /// cells can be filled.
    pub fn keyed(alphabet: &Alphabet, keyword: &str, fill: Fill) -> Result<Self> {
        let keyword = fold(keyword);
        let mut sequence: Vec<char> = Vec::with_capacity(alphabet.len());
        for (i, c) in keyword.chars().enumerate() {
            if keyword.chars().take(i).any(|prev| prev == c) {
                return Err(CipherError::DuplicateKeyChar(c));
            }
            if !alphabet.contains(c) {
                return Err(CipherError::KeyCharNotInAlphabet(c));
            }
            sequence.push(c);
        }
        for &c in alphabet.chars() {
            if !sequence.contains(&c) {
                sequence.push(c);
            }
        }

        let size = square_side(sequence.len());
        let trailing = size * size - sequence.len();
        match fill {
            Fill::Blank => sequence.resize(size * size, BLANK),
            Fill::Digits => {
                if trailing > 9 {
                    return Err(CipherError::InvalidSquare(format!(
                        "{trailing} trailing cells cannot be digit-filled"
                    )));
                }
                for d in 1..=trailing as u32 {
                    // d is in 1..=9, always representable
                    sequence.extend(char::from_digit(d, 10));
                }
            }
        }
        Ok(Self {
            size,
            cells: sequence,
        })
    }

    /// Parses a literal square from whitespace-separated single-character
    /// cells, row-major.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for token in text.split_whitespace() {
            let mut chars = token.chars();
            let c = chars
                .next()
                .ok_or_else(|| CipherError::InvalidSquare("empty cell".to_string()))?;
            if chars.next().is_some() {
                return Err(CipherError::InvalidSquare(format!(
                    "cell '{token}' is not a single character"
                )));
            }
            cells.push(c);
        }
        let size = square_side(cells.len());
        if cells.is_empty() || size * size != cells.len() {
            return Err(CipherError::InvalidSquare(format!(
                "{} cells do not form a square",
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Character at `(row, col)`; blank cells report the blank sentinel.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * self.size + col]
    }

    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.at(row, col) == BLANK
    }

    /// `(row, col)` of the first cell holding `c`, skipping blanks.
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        if c == BLANK {
            return None;
        }
        self.cells
            .iter()
            .position(|&cell| cell == c)
            .map(|i| (i / self.size, i % self.size))
    }

    /// Last row of `col` holding a real character.
    pub(crate) fn last_occupied_row(&self, col: usize) -> usize {
        (0..self.size)
            .rev()
            .find(|&row| !self.is_blank(row, col))
            .unwrap_or(0)
    }
}

/// An n×n grid of distinct integers `1..=n*n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSquare {
    size: usize,
    cells: Vec<usize>,
}

impl IntSquare {
    /// Builds a square from row-major rows, validating shape and contents.
    pub fn from_rows(rows: &[Vec<usize>]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(CipherError::InvalidSquare(format!(
                    "row of length {} in a {size}x{size} square",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(size, cells)
    }

    /// Parses a literal square from whitespace-separated integers, row-major.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for token in text.split_whitespace() {
            let value: usize = token.parse().map_err(|_| {
                CipherError::InvalidSquare(format!("'{token}' is not an integer"))
            })?;
            cells.push(value);
        }
        let size = square_side(cells.len());
        if cells.is_empty() || size * size != cells.len() {
            return Err(CipherError::InvalidSquare(format!(
                "{} cells do not form a square",
                cells.len()
            )));
        }
        Self::from_cells(size, cells)
    }

    fn from_cells(size: usize, cells: Vec<usize>) -> Result<Self> {
        let capacity = size * size;
        if capacity == 0 {
            return Err(CipherError::InvalidSquare("empty square".to_string()));
        }
        let mut seen = vec![false; capacity];
        for &v in &cells {
            if v == 0 || v > capacity {
                return Err(CipherError::InvalidSquare(format!(
                    "value {v} outside 1..={capacity}"
                )));
            }
            if seen[v - 1] {
                return Err(CipherError::InvalidSquare(format!("value {v} repeats")));
            }
            seen[v - 1] = true;
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Capacity in characters, n*n.
    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Row-major cell index holding `value` (`1..=n*n`).
    pub(crate) fn position_of(&self, value: usize) -> usize {
        // Distinctness over exactly 1..=n*n is enforced at construction.
        self.cells
            .iter()
            .position(|&v| v == value)
            .unwrap_or_default()
    }
}
