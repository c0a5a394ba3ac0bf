//! CLI infrastructure for the noughts game
//!
//! This module provides the command-line interface for interactive play and
//! engine-vs-engine simulation.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{GameConfig, GameMode};
