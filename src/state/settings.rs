//! Timer settings and their JSON file persistence

use std::{
    io::ErrorKind,
    num::{NonZeroU32, NonZeroU64},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::units::{EndCount, TotalSeconds};
use crate::error::Result;

pub const DEFAULT_TOTAL_SECONDS: u64 = 2 * 60 * 60;
pub const DEFAULT_NUM_ENDS: u32 = 8;
pub const DEFAULT_CONFIG_FILE: &str = "pace_timer_config.json";
pub const DEFAULT_MESSAGE: &str = "Each end is 15 minutes allotted to complete a game in two hours. \
If you are playing too slowly then the timer will show an end that you haven't played yet. \
You should play faster to stay on pace.";

const DEFAULT_TOTAL: NonZeroU64 = match NonZeroU64::new(DEFAULT_TOTAL_SECONDS) {
    Some(total) => total,
    None => panic!("DEFAULT_TOTAL_SECONDS must be non-zero"),
};

const DEFAULT_ENDS: NonZeroU32 = match NonZeroU32::new(DEFAULT_NUM_ENDS) {
    Some(ends) => ends,
    None => panic!("DEFAULT_NUM_ENDS must be non-zero"),
};

/// Settings the clock reads on every snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub total_seconds: TotalSeconds,
    pub num_ends: EndCount,
    pub logo_url: String,
    pub message: String,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            total_seconds: TotalSeconds::from_nonzero(DEFAULT_TOTAL),
            num_ends: EndCount::from_nonzero(DEFAULT_ENDS),
            logo_url: String::new(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// A validated partial update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub total_seconds: Option<TotalSeconds>,
    pub num_ends: Option<EndCount>,
    pub logo_url: Option<String>,
    pub message: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.total_seconds.is_none()
            && self.num_ends.is_none()
            && self.logo_url.is_none()
            && self.message.is_none()
    }

    /// The settings that result from applying this update to `current`
    pub fn apply_to(&self, current: &TimerSettings) -> TimerSettings {
        TimerSettings {
            total_seconds: self.total_seconds.unwrap_or(current.total_seconds),
            num_ends: self.num_ends.unwrap_or(current.num_ends),
            logo_url: self
                .logo_url
                .as_ref()
                .map(|url| url.trim().to_string())
                .unwrap_or_else(|| current.logo_url.clone()),
            message: self
                .message
                .as_ref()
                .map(|msg| msg.trim().to_string())
                .unwrap_or_else(|| current.message.clone()),
        }
    }
}

/// JSON file holding persisted settings
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read the file; `Ok(None)` when it does not exist yet.
    pub async fn load(&self) -> Result<Option<TimerSettings>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_str(&raw)?;
        Ok(Some(settings))
    }

    pub async fn save(&self, settings: &TimerSettings) -> Result<()> {
        let body = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, body).await?;
        info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
