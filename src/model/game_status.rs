use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Progression state of a single day's puzzle. `Won` and `Lost` are
/// terminal; a date never transitions out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Playing
    }
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won => Some(Outcome::Won),
            GameStatus::Lost => Some(Outcome::Lost),
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        write!(f, "{}", label)
    }
}

/// Terminal result recorded against a date in the archive calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => GameStatus::Won,
            Outcome::Lost => GameStatus::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }

    #[test]
    fn test_wire_representation() {
        // these strings are read back from saved games; they must not change
        assert_eq!(serde_json::to_string(&GameStatus::Playing).unwrap(), "\"playing\"");
        assert_eq!(serde_json::to_string(&GameStatus::Won).unwrap(), "\"won\"");
        assert_eq!(serde_json::to_string(&GameStatus::Lost).unwrap(), "\"lost\"");
        assert_eq!(serde_json::to_string(&Outcome::Lost).unwrap(), "\"lost\"");
    }

    #[test]
    fn test_outcome_only_for_terminal() {
        assert_eq!(GameStatus::Playing.outcome(), None);
        assert_eq!(GameStatus::Won.outcome(), Some(Outcome::Won));
        assert_eq!(GameStatus::Lost.outcome(), Some(Outcome::Lost));
    }
}
