//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Both full diagonals, checked together for any even-indexed move
pub const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check whether the move just played at `position` completed a line for `mark`.
    ///
    /// Only the lines through the played cell are inspected: its row, its
    /// column and, when `position` is even, both diagonals. Index 0 therefore
    /// also tests the {2, 4, 6} diagonal. That line cannot be complete for
    /// `mark` without already having been won through another move, so the
    /// extra check never changes the result.
    pub fn completes_line(cells: &[Cell; 9], mark: Mark, position: usize) -> bool {
        let target = mark.to_cell();
        let owned = |line: &[usize; 3]| line.iter().all(|&idx| cells[idx] == target);

        let row = position / 3;
        let row_line = [row * 3, row * 3 + 1, row * 3 + 2];
        if owned(&row_line) {
            return true;
        }

        let col = position % 3;
        let col_line = [col, col + 3, col + 6];
        if owned(&col_line) {
            return true;
        }

        position % 2 == 0 && DIAGONALS.iter().any(owned)
    }

    /// Check if a mark owns any complete line on the board
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_row() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        cells[5] = Cell::O;

        assert!(LineAnalyzer::completes_line(&cells, Mark::O, 5));
        assert!(!LineAnalyzer::completes_line(&cells, Mark::X, 5));
    }

    #[test]
    fn test_completes_column() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::X;
        cells[4] = Cell::X;
        cells[7] = Cell::X;

        assert!(LineAnalyzer::completes_line(&cells, Mark::X, 1));
        assert!(LineAnalyzer::completes_line(&cells, Mark::X, 7));
    }

    #[test]
    fn test_odd_position_skips_diagonals() {
        // The diagonal is complete but the move at 1 does not touch it.
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;
        cells[1] = Cell::X;

        assert!(!LineAnalyzer::completes_line(&cells, Mark::X, 1));
    }

    #[test]
    fn test_even_position_checks_both_diagonals() {
        // Move at 0 finds the anti-diagonal even though 0 is not on it.
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;
        cells[0] = Cell::O;

        assert!(LineAnalyzer::completes_line(&cells, Mark::O, 0));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Mark::X));
        assert!(!LineAnalyzer::has_won(&cells, Mark::O));
    }
}
