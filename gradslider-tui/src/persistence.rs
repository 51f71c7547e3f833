//! Slider persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gradslider_core::SliderArchive;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// `None` until a slider has been saved; the configured values apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider: Option<SliderArchive>,
    /// Absent in older files; `None` keeps the configured mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_continuous: Option<bool>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "corrupt state file, using defaults");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        slider: Some(app.archive()),
        is_continuous: Some(app.slider.config().is_continuous),
    }
}
