//! Ports (trait boundaries) between the game core and its move sources and front ends.
//!
//! The game core owns these traits; console input, rendering and the
//! decision engine plug in as implementations.

pub mod observer;
pub mod player;

pub use observer::{GameObserver, NullObserver};
pub use player::Player;
