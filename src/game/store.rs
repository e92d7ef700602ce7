use chrono::NaiveDate;
use log::{debug, info, trace, warn};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::generator::daily_sequence;
use super::storage::{PersistedState, Storage};
use crate::model::{
    DailyStats, GameStatus, Outcome, PuzzleRecord, SequenceData, Settings, MAX_HINTS,
    SEQUENCE_LENGTH, VISIBLE_COUNT,
};

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Owns the current puzzle's progression plus everything persisted across
/// sessions. Single-threaded and synchronous: each operation runs to
/// completion and flushes durable state before returning.
///
/// Violated preconditions (guessing after game over, no puzzle loaded) are
/// deliberately silent no-ops; the player must always be able to see a
/// puzzle and press buttons without tripping errors.
pub struct GameStore {
    storage: Box<dyn Storage>,
    persisted: PersistedState,
    status: GameStatus,
    guesses: Vec<i64>,
    hints_level: u8,
    daily_sequence: Option<SequenceData>,
    current_playing_date: Option<NaiveDate>,
    last_played_date: Option<NaiveDate>,
    playthrough_id: Uuid,
}

impl GameStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let persisted = storage.load().unwrap_or_default();
        let playthrough_id = Uuid::new_v4();
        trace!(
            target: "store",
            "session {} starts with {} completed puzzles",
            playthrough_id,
            persisted.puzzle_history.len()
        );
        Self {
            storage,
            persisted,
            status: GameStatus::default(),
            guesses: Vec::new(),
            hints_level: 0,
            daily_sequence: None,
            current_playing_date: None,
            last_played_date: None,
            playthrough_id,
        }
    }

    /// Enter the puzzle for `date`, usually today's. A date already in the
    /// archive is restored read-only; a new date starts fresh; re-entering
    /// the date already being played keeps session progress and only
    /// refreshes the dealt sequence.
    pub fn load_or_init(&mut self, date: NaiveDate) {
        let sequence = daily_sequence(date);
        let key = date_key(date);

        if let Some(record) = self.persisted.puzzle_history.get(&key).cloned() {
            trace!(target: "store", "{} already completed, restoring read-only", key);
            self.restore_record(&record);
        } else if self.last_played_date != Some(date) {
            trace!(
                target: "store",
                "fresh puzzle for {} (session {})", key, self.playthrough_id
            );
            self.reset_progress();
        }

        self.last_played_date = Some(date);
        self.current_playing_date = Some(date);
        self.daily_sequence = Some(sequence);
    }

    /// Enter an archive selection. Unlike [`GameStore::load_or_init`] a
    /// date without history always starts fresh, even when it matches the
    /// last date played.
    pub fn load_puzzle_by_date(&mut self, date: NaiveDate) {
        let sequence = daily_sequence(date);
        let key = date_key(date);

        if let Some(record) = self.persisted.puzzle_history.get(&key).cloned() {
            trace!(target: "store", "archive {} restored read-only", key);
            self.restore_record(&record);
        } else {
            trace!(target: "store", "archive {} not yet played", key);
            self.reset_progress();
        }

        self.current_playing_date = Some(date);
        self.daily_sequence = Some(sequence);
    }

    /// Evaluate a guess against the current target position. Wrong guesses
    /// reveal the next hidden term as a hint; the third wrong guess loses
    /// the puzzle. Ignored once the puzzle is over.
    pub fn submit_guess(&mut self, value: i64) {
        if self.status.is_terminal() {
            debug!(target: "store", "ignoring guess {} after game over", value);
            return;
        }
        let Some(sequence) = self.daily_sequence.as_ref() else {
            debug!(target: "store", "ignoring guess {} with no puzzle loaded", value);
            return;
        };

        let target_index = VISIBLE_COUNT + self.hints_level as usize;
        let Some(&target) = sequence.numbers.get(target_index) else {
            debug!(target: "store", "target index {} out of bounds", target_index);
            return;
        };

        self.guesses.push(value);

        if value == target {
            let attempts = self.hints_level + 1;
            info!(
                target: "store",
                "correct guess {} on attempt {}", value, attempts
            );
            self.status = GameStatus::Won;
            self.persisted.stats.record_win(attempts);
            self.record_completion(Outcome::Won);
            self.flush();
        } else {
            self.hints_level += 1;
            if self.hints_level >= MAX_HINTS {
                info!(target: "store", "out of hidden numbers, puzzle lost");
                self.status = GameStatus::Lost;
                self.persisted.stats.record_loss();
                self.record_completion(Outcome::Lost);
                self.flush();
            } else {
                trace!(
                    target: "store",
                    "wrong guess {}, revealing hint {}", value, self.hints_level
                );
            }
        }
    }

    /// Clear lifetime statistics. The archive and completed-date markers
    /// are left alone.
    pub fn reset_stats(&mut self) {
        info!(target: "store", "resetting lifetime stats");
        self.persisted.stats = DailyStats::default();
        self.flush();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.persisted.settings.dark_mode = !self.persisted.settings.dark_mode;
        self.flush();
    }

    pub fn toggle_high_contrast(&mut self) {
        self.persisted.settings.high_contrast = !self.persisted.settings.high_contrast;
        self.flush();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    pub fn hints_level(&self) -> u8 {
        self.hints_level
    }

    pub fn daily_sequence(&self) -> Option<&SequenceData> {
        self.daily_sequence.as_ref()
    }

    pub fn current_playing_date(&self) -> Option<NaiveDate> {
        self.current_playing_date
    }

    pub fn stats(&self) -> &DailyStats {
        &self.persisted.stats
    }

    pub fn completed_dates(&self) -> &BTreeMap<String, Outcome> {
        &self.persisted.completed_dates
    }

    pub fn puzzle_history(&self) -> &BTreeMap<String, PuzzleRecord> {
        &self.persisted.puzzle_history
    }

    pub fn settings(&self) -> Settings {
        self.persisted.settings
    }

    /// Position the player is currently guessing at.
    pub fn target_index(&self) -> usize {
        VISIBLE_COUNT + self.hints_level as usize
    }

    /// How many leading terms the player can currently see.
    pub fn revealed_count(&self) -> usize {
        (VISIBLE_COUNT + self.hints_level as usize).min(SEQUENCE_LENGTH)
    }

    fn restore_record(&mut self, record: &PuzzleRecord) {
        self.status = record.status;
        self.guesses = record.guesses.clone();
        self.hints_level = record.hints_level;
    }

    fn reset_progress(&mut self) {
        self.status = GameStatus::Playing;
        self.guesses.clear();
        self.hints_level = 0;
    }

    fn record_completion(&mut self, outcome: Outcome) {
        let Some(date) = self.current_playing_date else {
            debug!(target: "store", "terminal state with no playing date, nothing to archive");
            return;
        };
        let key = date_key(date);
        self.persisted.completed_dates.insert(key.clone(), outcome);
        self.persisted.puzzle_history.insert(
            key,
            PuzzleRecord {
                guesses: self.guesses.clone(),
                hints_level: self.hints_level,
                status: self.status,
            },
        );
    }

    fn flush(&mut self) {
        if !self.storage.save(&self.persisted) {
            warn!(target: "store", "failed to persist game state");
        }
    }
}
