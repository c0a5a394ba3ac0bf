//! Observer port - abstraction for watching a game as it is played
//!
//! The driving loop reports each event to an observer, which keeps
//! rendering and statistics out of the game logic.

use crate::{
    Error, Result,
    tictactoe::{Board, GameOutcome, Mark, Move},
};

/// Observer trait for monitoring a game
///
/// # Event Sequence
///
/// 1. `on_game_start(board, first)` - Once, with the empty board
/// 2. For each turn:
///    - `on_rejected_move(...)` - For every move the board refused
///    - `on_move(board, mv)` - Once the move is applied
/// 3. `on_game_end(board, outcome)` - Once at the end
///
/// Every hook defaults to doing nothing.
pub trait GameObserver {
    fn on_game_start(&mut self, _board: &Board, _first: Mark) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been applied; `board` already contains it.
    fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    fn on_rejected_move(&mut self, _mark: Mark, _position: usize, _reason: &Error) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _board: &Board, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
