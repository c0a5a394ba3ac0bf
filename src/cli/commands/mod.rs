//! Subcommand implementations

pub mod play;
pub mod simulate;
