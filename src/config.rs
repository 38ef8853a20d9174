//! Runtime settings, persisted next to the game record in their own slot.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::state::KeyValueStore;

pub const SETTINGS_KEY: &str = "gameshow_settings";
pub const DEFAULT_STATE_KEY: &str = "gameState";
pub const TOAST_LIMIT: usize = 3;

/// What to do with a multiplier the operator typed that is not a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierPolicy {
    /// Refuse the input and keep the current multiplier.
    #[default]
    Reject,
    /// Store `NaN` and let it flow through point arithmetic.
    Propagate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    /// Storage slot holding the game record.
    pub state_key: String,
    pub poll_interval_ms: u32,
    /// How long the display celebrates after a score increase.
    pub celebration_ms: u32,
    pub toast_ms: u32,
    pub multiplier_policy: MultiplierPolicy,
    pub celebrate: bool,
    pub log_level: String,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            poll_interval_ms: 1000,
            celebration_ms: 3000,
            toast_ms: 5000,
            multiplier_policy: MultiplierPolicy::Reject,
            celebrate: true,
            log_level: "info".to_string(),
        }
    }
}

impl ShowConfig {
    /// Reads settings from `store`, falling back to defaults for anything
    /// missing or unreadable.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("ignoring malformed settings: {e}");
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("settings unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), StoreError> {
        let raw = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &raw)
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
