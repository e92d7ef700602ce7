use serde::{Deserialize, Serialize};

/// Presentation flags persisted alongside game progress. Not consulted by
/// the core rules; carried here so one save document holds everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dark_mode: false,
            high_contrast: false,
        }
    }
}
