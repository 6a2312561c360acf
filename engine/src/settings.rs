use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, FirstMover};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PassAndPlay,
    VersusBot {
        difficulty: Difficulty,
        first_mover: FirstMover,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
}

impl GameSettings {
    pub fn versus_bot(difficulty: Difficulty, first_mover: FirstMover) -> Self {
        Self {
            mode: GameMode::VersusBot {
                difficulty,
                first_mover,
            },
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PassAndPlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pass_and_play() {
        assert_eq!(GameSettings::default().mode, GameMode::PassAndPlay);
    }

    #[test]
    fn test_settings_yaml_round_trip() {
        let settings = GameSettings::versus_bot(Difficulty::Hard, FirstMover::Random);
        let yaml = serde_yaml_ng::to_string(&settings).unwrap();
        let parsed: GameSettings = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }
}
