//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex as AsyncMutex};
use tracing::{debug, info};

use super::{
    pace_state::{PaceState, QUICK_ADJUST_SECONDS},
    settings::{SettingsStore, SettingsUpdate, TimerSettings},
    status::{Reading, StatusPayload},
    time_source::{SystemTimeSource, TimeSource},
    units::{EndCount, RemainingSeconds, TotalSeconds},
};
use crate::{
    display::Frame,
    error::{PaceError, Result},
};

/// Shared state handed to the HTTP handlers and the display loop.
///
/// The clock and the settings sit behind a single mutex so that operations
/// touching both (lowering the total, replacing settings) are atomic.
#[derive(Debug)]
pub struct AppState {
    pace: Mutex<PaceState>,
    time: Arc<dyn TimeSource>,
    store: SettingsStore,
    /// Held across the file write so config updates apply in order
    config_write: AsyncMutex<()>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Latest frame composed by the display loop
    pub frame_tx: watch::Sender<Option<Frame>>,
    /// Keep the receiver alive to prevent channel closure
    pub _frame_rx: watch::Receiver<Option<Frame>>,
}

impl AppState {
    /// Create a new AppState driven by the system clock
    pub fn new(port: u16, host: String, settings: TimerSettings, store: SettingsStore) -> Self {
        Self::with_time_source(port, host, settings, store, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(
        port: u16,
        host: String,
        settings: TimerSettings,
        store: SettingsStore,
        time: Arc<dyn TimeSource>,
    ) -> Self {
        let (frame_tx, frame_rx) = watch::channel(None);
        let pace = PaceState::new(settings, time.now());

        Self {
            pace: Mutex::new(pace),
            time,
            store,
            config_write: AsyncMutex::new(()),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            frame_tx,
            _frame_rx: frame_rx,
        }
    }

    fn lock_pace(&self) -> Result<MutexGuard<'_, PaceState>> {
        self.pace
            .lock()
            .map_err(|e| PaceError::LockPoisoned(e.to_string()))
    }

    /// Apply a mutation under the lock and record it as the last action
    fn mutate<T, F>(&self, action: &str, updater: F) -> Result<T>
    where
        F: FnOnce(&mut PaceState, Instant) -> T,
    {
        let mut pace = self.lock_pace()?;
        let now = self.time.now();
        let result = updater(&mut *pace, now);
        drop(pace); // Release the lock early

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(result)
    }

    /// Status and progress from one locked read
    pub fn read(&self) -> Result<Reading> {
        let pace = self.lock_pace()?;
        Ok(pace.reading(self.time.now()))
    }

    pub fn status(&self) -> Result<StatusPayload> {
        self.read().map(|reading| reading.status)
    }

    pub fn elapsed_seconds(&self) -> Result<f64> {
        let pace = self.lock_pace()?;
        Ok(pace.clock.elapsed_at(self.time.now()))
    }

    pub fn is_paused(&self) -> Result<bool> {
        Ok(self.lock_pace()?.clock.is_paused())
    }

    pub fn settings(&self) -> Result<TimerSettings> {
        Ok(self.lock_pace()?.settings.clone())
    }

    pub fn set_elapsed(&self, seconds: f64) -> Result<()> {
        debug!("Setting elapsed to {:.1}s", seconds);
        self.mutate("set_elapsed", |pace, now| pace.clock.set_elapsed(seconds, now))
    }

    pub fn reset(&self) -> Result<()> {
        info!("Resetting timer");
        self.mutate("reset", |pace, now| pace.clock.reset(now))
    }

    pub fn pause(&self) -> Result<()> {
        let changed = self.mutate("pause", |pace, now| pace.clock.pause(now))?;
        if changed {
            info!("Timer paused");
        } else {
            debug!("Pause requested while already paused");
        }
        Ok(())
    }

    pub fn resume(&self) -> Result<()> {
        let changed = self.mutate("resume", |pace, now| pace.clock.resume(now))?;
        if changed {
            info!("Timer resumed");
        } else {
            debug!("Resume requested while already running");
        }
        Ok(())
    }

    /// Returns the remaining seconds actually applied
    pub fn set_remaining(&self, remaining: RemainingSeconds) -> Result<f64> {
        let applied = self.mutate("set_remaining", |pace, now| pace.set_remaining(remaining, now))?;
        info!("Remaining time set to {:.0}s", applied);
        Ok(applied)
    }

    pub fn set_total(&self, total: TotalSeconds) -> Result<u64> {
        self.mutate("set_total", |pace, now| pace.set_total(total, now))?;
        info!("Total duration set to {}s", total.get());
        Ok(total.get())
    }

    pub fn set_ends(&self, ends: EndCount) -> Result<u32> {
        self.mutate("set_ends", |pace, _| pace.set_ends(ends))?;
        info!("Number of ends set to {}", ends.get());
        Ok(ends.get())
    }

    /// Add one minute of elapsed time; may run past the total
    pub fn add_time(&self) -> Result<f64> {
        let elapsed = self.mutate("add_time", |pace, now| {
            pace.adjust_elapsed(QUICK_ADJUST_SECONDS, now)
        })?;
        info!("Added one minute, elapsed now {:.0}s", elapsed);
        Ok(elapsed)
    }

    /// Remove one minute of elapsed time, stopping at zero
    pub fn subtract_time(&self) -> Result<f64> {
        let elapsed = self.mutate("subtract_time", |pace, now| {
            pace.adjust_elapsed(-QUICK_ADJUST_SECONDS, now)
        })?;
        info!("Subtracted one minute, elapsed now {:.0}s", elapsed);
        Ok(elapsed)
    }

    /// Persist the update first, then apply it; a failed write leaves the
    /// live settings untouched. Only the fields named by the update are
    /// applied, so direct changes made during the write survive.
    pub async fn update_settings(&self, update: SettingsUpdate) -> Result<TimerSettings> {
        if update.is_empty() {
            return Err(PaceError::EmptyUpdate);
        }

        let _write = self.config_write.lock().await;
        let next = update.apply_to(&self.settings()?);
        self.store.save(&next).await?;

        let applied = self.mutate("config", |pace, now| pace.apply_update(&update, now))?;
        info!(
            "Configuration updated: total={}s ends={}",
            applied.total_seconds.get(),
            applied.num_ends.get()
        );
        Ok(applied)
    }

    /// Settings as currently stored on disk, if any
    pub async fn stored_settings(&self) -> Result<Option<TimerSettings>> {
        self.store.load().await
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn publish_frame(&self, frame: Frame) {
        self.frame_tx.send_replace(Some(frame));
    }

    pub fn latest_frame(&self) -> Option<Frame> {
        self.frame_tx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
