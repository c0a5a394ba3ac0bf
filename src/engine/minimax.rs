//! Exhaustive minimax over the live board.
//!
//! The search applies each candidate move to the board it is given, recurses,
//! then undoes the move before looking at the next one. Every frame leaves
//! the board exactly as it found it, so the caller sees no mutation once the
//! search returns.

use crate::tictactoe::{Board, Mark};

/// Best move found at one ply and its score from the engine's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<usize>,
    pub score: i32,
}

/// Minimax searcher scoring positions for `mark`.
///
/// Scores are positive when `mark` wins, negative when it loses and zero for
/// a draw. A win is worth `1 + empty cells` at the moment it is seen, so
/// faster wins and slower losses are preferred.
#[derive(Debug, Clone)]
pub struct Minimax {
    mark: Mark,
    nodes: u64,
}

impl Minimax {
    pub fn new(mark: Mark) -> Self {
        Self { mark, nodes: 0 }
    }

    /// The mark whose score is maximised
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Number of positions visited by all searches so far
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Search every continuation with `player` to move.
    ///
    /// Ties keep the lowest position because candidates are tried in
    /// ascending order and only a strictly better score replaces the best.
    /// Returns `position: None` when the board is already terminal.
    pub fn search(&mut self, board: &mut Board, player: Mark) -> SearchResult {
        self.nodes += 1;
        let opponent = player.opponent();

        // Only the side that just moved can have completed a line.
        if board.winner() == Some(opponent) {
            let magnitude = 1 + board.empty_count() as i32;
            let score = if opponent == self.mark {
                magnitude
            } else {
                -magnitude
            };
            return SearchResult {
                position: None,
                score,
            };
        }
        if !board.has_empty_cell() {
            return SearchResult {
                position: None,
                score: 0,
            };
        }

        let maximizing = player == self.mark;
        let mut best = SearchResult {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for position in board.available_moves() {
            let applied = board.apply_move(player, position);
            debug_assert!(applied, "available move {position} was occupied");

            let mut simulation = self.search(board, opponent);
            board.undo_move(position);
            simulation.position = Some(position);

            let improves = if maximizing {
                simulation.score > best.score
            } else {
                simulation.score < best.score
            };
            if improves {
                best = simulation;
            }
        }

        best
    }
}

/// Run a one-off search scoring the board for `engine_mark` with `player` to move.
pub fn minimax(board: &mut Board, player: Mark, engine_mark: Mark) -> SearchResult {
    Minimax::new(engine_mark).search(board, player)
}
