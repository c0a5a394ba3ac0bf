//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, Board, Cell, Mark};
pub use game::{GameOutcome, GameRecord, Move, play_game};
pub use lines::{LineAnalyzer, WINNING_LINES};
