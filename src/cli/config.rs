//! Shared configuration types for CLI commands

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{engine::Difficulty, tictactoe::Mark};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsComputer,
        GameMode::ComputerVsComputer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsComputer => "human-vs-computer",
            GameMode::ComputerVsComputer => "computer-vs-computer",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "human-vs-human" | "hvh" => Ok(GameMode::HumanVsHuman),
            "human-vs-computer" | "hvc" => Ok(GameMode::HumanVsComputer),
            "computer-vs-computer" | "cvc" => Ok(GameMode::ComputerVsComputer),
            _ => Err(crate::Error::ParseGameMode {
                input: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Settings for an interactive session
///
/// Loaded from defaults, then an optional TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game mode; the interactive menu is shown when unset
    pub mode: Option<GameMode>,

    /// Engine difficulty for computer players
    pub difficulty: Difficulty,

    /// Mark taken by the human in human-vs-computer games
    pub human_mark: Mark,

    /// Mark that moves first
    pub first_mark: Mark,

    /// Random seed for reproducible engine choices
    pub seed: Option<u64>,

    /// Whether to colour the board
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            difficulty: Difficulty::default(),
            human_mark: Mark::X,
            first_mark: Mark::X,
            seed: None,
            color: true,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str, origin: &str) -> crate::Result<Self> {
        toml::from_str(text).map_err(|e| crate::Error::Config {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_toml(&text, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml("", "inline").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let text = r#"
            mode = "human-vs-computer"
            difficulty = "easy"
            human_mark = "O"
            first_mark = "O"
            seed = 42
            color = false
        "#;
        let config = GameConfig::from_toml(text, "inline").unwrap();
        assert_eq!(config.mode, Some(GameMode::HumanVsComputer));
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.human_mark, Mark::O);
        assert_eq!(config.first_mark, Mark::O);
        assert_eq!(config.seed, Some(42));
        assert!(!config.color);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let err = GameConfig::from_toml("difficulty = \"medium\"", "inline").unwrap_err();
        assert!(matches!(err, crate::Error::Config { .. }));
    }

    #[test]
    fn game_mode_accepts_aliases() {
        assert_eq!("hvc".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer);
        assert_eq!(
            "Computer_vs_Computer".parse::<GameMode>().unwrap(),
            GameMode::ComputerVsComputer
        );
        assert!("solo".parse::<GameMode>().is_err());
    }
}
