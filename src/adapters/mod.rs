//! Adapters implementing the game ports for a text console.
//!
//! Following hexagonal architecture, adapters depend on the ports, not the
//! other way around. Both adapters are generic over their streams so they
//! can be driven by stdin/stdout or by in-memory buffers in tests.

pub mod console;
pub mod human;

pub use console::{ConsoleObserver, Palette, SharedWriter, render_board};
pub use human::HumanPlayer;
