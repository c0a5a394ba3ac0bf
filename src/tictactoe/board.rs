//! Board state representation and move application

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lines::LineAnalyzer;

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

/// The symbol a side plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(crate::Error::ParseMark {
                input: other.to_string(),
            }),
        }
    }
}

/// The 9-cell grid plus the winner recorded by the last winning move.
///
/// Cells are stored row-major (`index = row * 3 + col`). The board is
/// mutated in place by [`Board::apply_move`] and [`Board::undo_move`]; it is
/// also `Copy`, so callers that must not observe search mutations can hand
/// out a scratch copy instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    winner: Option<Mark>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().take(BOARD_CELLS).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace other than a literal space is ignored, so both `"XX.OO...."`
    /// and a multi-line layout are accepted. `.`, `_` and ` ` mark empty cells.
    /// If one mark already owns a complete line it is recorded as the winner.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 cell characters
    /// - Any character is not a valid cell representation
    /// - Both marks own a complete line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| *c == ' ' || !c.is_whitespace())
            .collect();
        let cells = Self::parse_cells(&chars, s)?;

        let x_wins = LineAnalyzer::has_won(&cells, Mark::X);
        let o_wins = LineAnalyzer::has_won(&cells, Mark::O);
        let winner = match (x_wins, o_wins) {
            (true, true) => {
                return Err(crate::Error::InvalidBoard {
                    context: s.to_string(),
                    reason: "both marks cannot own winning lines".to_string(),
                });
            }
            (true, false) => Some(Mark::X),
            (false, true) => Some(Mark::O),
            (false, false) => None,
        };

        Ok(Board { cells, winner })
    }

    /// Read-only view of the cells in row-major order
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// The mark that completed a line, if any
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All empty positions, in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether at least one cell is still empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// A board is terminal once a winner is recorded or no cell is empty
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || !self.has_empty_cell()
    }

    /// Place `mark` at `position` if the cell is empty.
    ///
    /// Records `mark` as the winner when the move completes one of the lines
    /// through `position`. Returns `false` and leaves the board untouched when
    /// the cell is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..9`. Use [`Board::try_apply_move`]
    /// for untrusted input.
    pub fn apply_move(&mut self, mark: Mark, position: usize) -> bool {
        assert!(
            position < BOARD_CELLS,
            "position {position} is out of bounds (must be 0-8)"
        );

        if !self.is_empty(position) {
            return false;
        }

        self.cells[position] = mark.to_cell();
        if LineAnalyzer::completes_line(&self.cells, mark, position) {
            self.winner = Some(mark);
        }
        true
    }

    /// Checked variant of [`Board::apply_move`] for moves from outside the crate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index outside `0..9` and
    /// [`crate::Error::InvalidMove`] for an occupied cell.
    pub fn try_apply_move(&mut self, mark: Mark, position: usize) -> Result<(), crate::Error> {
        if position >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position });
        }
        if !self.apply_move(mark, position) {
            return Err(crate::Error::InvalidMove { position });
        }
        debug!(%mark, position, winner = ?self.winner, "applied move");
        Ok(())
    }

    /// Reset `position` to empty and clear the recorded winner.
    ///
    /// The winner is cleared unconditionally, whichever move produced it.
    /// Callers must only undo the most recent move.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..9`.
    pub fn undo_move(&mut self, position: usize) {
        assert!(
            position < BOARD_CELLS,
            "position {position} is out of bounds (must be 0-8)"
        );
        self.cells[position] = Cell::Empty;
        self.winner = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
