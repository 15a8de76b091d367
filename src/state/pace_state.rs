//! Clock and settings behind one lock
//!
//! Everything here is plain arithmetic on an explicit `now`; `AppState`
//! supplies the instant and the mutex.

use std::time::Instant;

use super::{
    clock::ClockState,
    settings::{SettingsUpdate, TimerSettings},
    status::{Reading, StatusPayload},
    units::{EndCount, RemainingSeconds, TotalSeconds},
};
use crate::progress::compute_progress;

/// Size of one quick adjustment, in seconds
pub const QUICK_ADJUST_SECONDS: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct PaceState {
    pub clock: ClockState,
    pub settings: TimerSettings,
}

impl PaceState {
    pub fn new(settings: TimerSettings, now: Instant) -> Self {
        Self {
            clock: ClockState::started_at(now),
            settings,
        }
    }

    pub fn reading(&self, now: Instant) -> Reading {
        let progress = compute_progress(
            self.clock.elapsed_at(now),
            self.settings.total_seconds.as_f64(),
            self.settings.num_ends.get(),
        );
        let status = StatusPayload::project(&progress, self.clock.is_paused(), &self.settings);
        Reading { status, progress }
    }

    /// Returns the remaining time actually applied after clamping.
    pub fn set_remaining(&mut self, remaining: RemainingSeconds, now: Instant) -> f64 {
        let total = self.settings.total_seconds;
        let remaining = remaining.clamped_to(total);
        self.clock.set_elapsed(total.as_f64() - remaining, now);
        remaining
    }

    /// Change the total, pulling elapsed down to it if it would overrun.
    pub fn set_total(&mut self, total: TotalSeconds, now: Instant) {
        self.settings.total_seconds = total;
        self.clamp_elapsed_to_total(now);
    }

    pub fn set_ends(&mut self, ends: EndCount) {
        self.settings.num_ends = ends;
    }

    /// Shift elapsed by `delta` seconds, floored at zero. Not clamped to the
    /// total, so adding time can overrun it.
    pub fn adjust_elapsed(&mut self, delta: f64, now: Instant) -> f64 {
        let adjusted = (self.clock.elapsed_at(now) + delta).max(0.0);
        self.clock.set_elapsed(adjusted, now);
        adjusted
    }

    /// Apply only the fields the update names, with the same clamp as
    /// `set_total`. Returns the resulting settings.
    pub fn apply_update(&mut self, update: &SettingsUpdate, now: Instant) -> TimerSettings {
        self.settings = update.apply_to(&self.settings);
        self.clamp_elapsed_to_total(now);
        self.settings.clone()
    }

    fn clamp_elapsed_to_total(&mut self, now: Instant) {
        let total = self.settings.total_seconds.as_f64();
        if self.clock.elapsed_at(now) > total {
            self.clock.set_elapsed(total, now);
        }
    }
}
