use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DisplayFromStr;

use super::sequence_data::MAX_HINTS;

/// Lifetime statistics across all completed daily puzzles. Updated exactly
/// once per puzzle, at the moment it reaches a terminal state.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    // keyed by attempts used (1..=3); saved games carry the keys as strings
    #[serde_as(as = "BTreeMap<DisplayFromStr, _>")]
    pub guess_distribution: BTreeMap<u8, u32>,
}

impl Default for DailyStats {
    fn default() -> Self {
        let mut guess_distribution = BTreeMap::new();
        for attempts in 1..=MAX_HINTS {
            guess_distribution.insert(attempts, 0);
        }
        DailyStats {
            played: 0,
            won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution,
        }
    }
}

impl DailyStats {
    pub fn record_win(&mut self, attempts: u8) {
        self.played += 1;
        self.won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        *self.guess_distribution.entry(attempts).or_insert(0) += 1;
    }

    pub fn record_loss(&mut self) {
        self.played += 1;
        self.current_streak = 0;
    }

    pub fn lost(&self) -> u32 {
        self.played - self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_distribution_is_seeded() {
        let stats = DailyStats::default();
        assert_eq!(stats.guess_distribution.len(), 3);
        assert_eq!(stats.guess_distribution.get(&1), Some(&0));
        assert_eq!(stats.guess_distribution.get(&3), Some(&0));
    }

    #[test]
    fn test_record_win_bumps_streak_and_distribution() {
        let mut stats = DailyStats::default();
        stats.record_win(1);
        stats.record_win(2);

        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(stats.guess_distribution.get(&2), Some(&1));
    }

    #[test]
    fn test_record_loss_resets_streak_but_not_max() {
        let mut stats = DailyStats::default();
        stats.record_win(1);
        stats.record_win(1);
        stats.record_loss();

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.current_streak, 0, "loss should reset the streak");
        assert_eq!(stats.max_streak, 2, "loss should not touch the max streak");
        assert_eq!(stats.lost(), 1);
    }

    #[test]
    fn test_distribution_sums_to_wins() {
        let mut stats = DailyStats::default();
        stats.record_win(1);
        stats.record_win(3);
        stats.record_loss();
        stats.record_win(3);

        let total: u32 = stats.guess_distribution.values().sum();
        assert_eq!(total, stats.won);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&DailyStats::default()).unwrap();
        assert!(json.contains("\"currentStreak\""));
        assert!(json.contains("\"maxStreak\""));
        assert!(json.contains("\"guessDistribution\""));
        assert!(json.contains("\"1\":0"), "distribution keys serialize as strings");
    }
}
