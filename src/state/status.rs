//! Point-in-time readings handed to every consumer

use serde::{Deserialize, Serialize};

use super::settings::TimerSettings;
use crate::progress::ProgressSnapshot;

/// The status payload served on `/status` and read by the display loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub total_seconds: u64,
    pub num_ends: u32,
    pub paused: bool,
    pub logo_url: String,
    pub message: String,
}

impl StatusPayload {
    /// Build the payload from a progress computation. Elapsed is truncated
    /// before remaining is derived, so the two always add up to total while
    /// the run is in range.
    pub fn project(progress: &ProgressSnapshot, paused: bool, settings: &TimerSettings) -> Self {
        let total = settings.total_seconds.get();
        let elapsed = progress.elapsed_seconds.trunc() as u64;

        Self {
            elapsed_seconds: elapsed,
            remaining_seconds: total.saturating_sub(elapsed),
            total_seconds: total,
            num_ends: settings.num_ends.get(),
            paused,
            logo_url: settings.logo_url.clone(),
            message: settings.message.clone(),
        }
    }
}

/// Status and progress taken from the same locked read
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub status: StatusPayload,
    pub progress: ProgressSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{progress::compute_progress, state::units::TotalSeconds};

    #[test]
    fn truncates_elapsed_and_floors_remaining() {
        let settings = TimerSettings {
            total_seconds: TotalSeconds::new(600).unwrap(),
            ..Default::default()
        };

        let status = StatusPayload::project(&compute_progress(90.9, 600.0, 8), false, &settings);
        assert_eq!(status.elapsed_seconds, 90);
        assert_eq!(status.remaining_seconds, 510);

        let status = StatusPayload::project(&compute_progress(725.0, 600.0, 8), true, &settings);
        assert_eq!(status.elapsed_seconds, 725);
        assert_eq!(status.remaining_seconds, 0);
        assert!(status.paused);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let settings = TimerSettings::default();
        let status = StatusPayload::project(&compute_progress(0.0, 7200.0, 8), false, &settings);
        let json = serde_json::to_value(&status).unwrap();
        for key in [
            "elapsed_seconds",
            "remaining_seconds",
            "total_seconds",
            "num_ends",
            "paused",
            "logo_url",
            "message",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
