use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::model::{DailyStats, Outcome, PuzzleRecord, Settings};

/// Everything that survives a restart, as one serialized document. Field
/// names are read back from existing saves and must not change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub stats: DailyStats,

    /// Date string (`YYYY-MM-DD`) to terminal result, for the archive
    /// calendar markers.
    #[serde(default)]
    pub completed_dates: BTreeMap<String, Outcome>,

    /// Date string to the frozen record of that day's completed puzzle.
    #[serde(default)]
    pub puzzle_history: BTreeMap<String, PuzzleRecord>,

    #[serde(default)]
    pub settings: Settings,
}

/// Durable key-value backing for [`PersistedState`]. The store loads once
/// at construction and saves after every mutation; implementations decide
/// where the document lives.
pub trait Storage {
    /// `None` when nothing usable is stored; the caller falls back to
    /// defaults rather than treating this as an error.
    fn load(&self) -> Option<PersistedState>;

    fn save(&mut self, state: &PersistedState) -> bool;
}

/// One JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }

    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        let mut path = data_dir.join("numdle");
        path.push("state.json");
        path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Option<PersistedState> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(
                    target: "storage",
                    "discarding unreadable save at {:?}: {}", self.path, e
                );
                None
            }
        }
    }

    fn save(&mut self, state: &PersistedState) -> bool {
        if let Some(dir) = self.path.parent() {
            if fs::create_dir_all(dir).is_err() {
                return false;
            }
        }
        match serde_json::to_string(state) {
            Ok(contents) => fs::write(&self.path, contents).is_ok(),
            Err(_) => false,
        }
    }
}

/// In-memory stand-in for tests and ephemeral runs. Clones share the same
/// underlying document, so a second store built over a clone sees what the
/// first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<Option<PersistedState>>>,
}

impl Storage for MemoryStorage {
    fn load(&self) -> Option<PersistedState> {
        self.state.borrow().clone()
    }

    fn save(&mut self, state: &PersistedState) -> bool {
        *self.state.borrow_mut() = Some(state.clone());
        true
    }
}
