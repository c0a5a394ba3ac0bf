//! Player port - abstraction over anything that can choose a move
//!
//! The driving loop asks whichever player owns the mark to move for a board
//! index. Implementations include:
//! - Human input read from a terminal
//! - The minimax decision engine
//! - Random play (the engine's easy difficulty)

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// A source of moves for one side of the game.
///
/// # Examples
///
/// ```
/// use noughts::{
///     Result,
///     ports::Player,
///     tictactoe::{Board, Mark},
/// };
///
/// struct FirstFree(Mark);
///
/// impl Player for FirstFree {
///     fn mark(&self) -> Mark {
///         self.0
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
///
///     fn get_move(&mut self, board: &Board) -> Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
/// }
/// ```
pub trait Player {
    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Human-readable name for logs and summaries.
    fn name(&self) -> &str;

    /// Choose a position (0-8) for the current board.
    ///
    /// The board is read-only; the driving loop applies the returned move.
    /// Implementations should return an empty cell, but the loop tolerates
    /// a rejected move by asking again.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, for example when the
    /// board is full or input has been closed.
    fn get_move(&mut self, board: &Board) -> Result<usize>;
}
