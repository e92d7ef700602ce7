use serde::{Deserialize, Serialize};

use super::game_status::GameStatus;

/// Snapshot of a completed puzzle, keyed by date in the archive. Written
/// once when the puzzle reaches a terminal state and never rewritten;
/// completed dates cannot be replayed to change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub guesses: Vec<i64>,
    pub hints_level: u8,
    pub status: GameStatus,
}
