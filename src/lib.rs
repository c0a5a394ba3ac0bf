//! Noughts and crosses with an exhaustive minimax opponent
//!
//! This crate provides:
//! - The 3x3 board with move application, undo and win detection
//! - A decision engine that searches the full game tree
//! - A player abstraction shared by human input and the engine
//! - A terminal front end with menus and engine-vs-engine simulation

pub mod adapters;
pub mod cli;
pub mod engine;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use engine::{ComputerPlayer, Difficulty};
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, GameOutcome, Mark};
