//! Decision engine: exhaustive minimax search and the computer player built on it

pub mod computer;
pub mod difficulty;
pub mod minimax;

pub use computer::ComputerPlayer;
pub use difficulty::Difficulty;
pub use minimax::{Minimax, SearchResult, minimax};
