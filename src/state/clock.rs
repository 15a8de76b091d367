//! The authoritative pace clock
//!
//! Elapsed time is derived from instant deltas, never accumulated per tick:
//! `elapsed = now - reference + offset` while running, frozen at the pause
//! instant while paused. Every mutator adjusts `reference`/`offset` instead
//! of an elapsed counter.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ClockState {
    reference: Instant,
    offset: f64,
    paused_at: Option<Instant>,
}

impl ClockState {
    /// A running clock at zero
    pub fn started_at(now: Instant) -> Self {
        Self {
            reference: now,
            offset: 0.0,
            paused_at: None,
        }
    }

    /// Elapsed seconds as of `now`. Never negative.
    pub fn elapsed_at(&self, now: Instant) -> f64 {
        let until = self.paused_at.unwrap_or(now);
        let running = until.saturating_duration_since(self.reference).as_secs_f64();
        (running + self.offset).max(0.0)
    }

    /// Jump to `seconds` elapsed without touching the pause flag.
    ///
    /// While paused the reference is anchored at the pause instant so the
    /// value set here is also the value seen right after the next resume.
    pub fn set_elapsed(&mut self, seconds: f64, now: Instant) {
        self.reference = self.paused_at.unwrap_or(now);
        self.offset = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    }

    pub fn reset(&mut self, now: Instant) {
        self.set_elapsed(0.0, now);
    }

    /// Returns false if the clock was already paused.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.paused_at.is_some() {
            return false;
        }
        self.paused_at = Some(now);
        true
    }

    /// Returns false if the clock was already running.
    pub fn resume(&mut self, now: Instant) -> bool {
        match self.paused_at.take() {
            Some(paused_at) => {
                self.reference += now.saturating_duration_since(paused_at);
                true
            }
            None => false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TOLERANCE: f64 = 1e-6;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn runs_from_zero() {
        let t0 = Instant::now();
        let clock = ClockState::started_at(t0);
        assert_eq!(clock.elapsed_at(t0), 0.0);
        assert!((clock.elapsed_at(t0 + secs(42)) - 42.0).abs() < TOLERANCE);
        assert!(!clock.is_paused());
    }

    #[test]
    fn pause_freezes_and_resume_continues_without_jump() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);

        let before = clock.elapsed_at(t0 + secs(100));
        assert!(clock.pause(t0 + secs(100)));
        assert_eq!(clock.elapsed_at(t0 + secs(100)), before);
        assert_eq!(clock.elapsed_at(t0 + secs(5000)), before);

        assert!(clock.resume(t0 + secs(400)));
        assert!((clock.elapsed_at(t0 + secs(400)) - before).abs() < TOLERANCE);
        assert!((clock.elapsed_at(t0 + secs(410)) - (before + 10.0)).abs() < TOLERANCE);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);

        assert!(clock.pause(t0 + secs(10)));
        assert!(!clock.pause(t0 + secs(20)));
        assert!((clock.elapsed_at(t0 + secs(30)) - 10.0).abs() < TOLERANCE);

        assert!(clock.resume(t0 + secs(40)));
        assert!(!clock.resume(t0 + secs(50)));
        assert!((clock.elapsed_at(t0 + secs(60)) - 30.0).abs() < TOLERANCE);
    }

    #[test]
    fn set_elapsed_round_trips_while_running() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);
        clock.set_elapsed(1234.5, t0 + secs(7));
        assert!((clock.elapsed_at(t0 + secs(7)) - 1234.5).abs() < TOLERANCE);
        assert!((clock.elapsed_at(t0 + secs(8)) - 1235.5).abs() < TOLERANCE);
    }

    #[test]
    fn set_elapsed_while_paused_survives_resume() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);
        clock.pause(t0 + secs(50));

        clock.set_elapsed(600.0, t0 + secs(80));
        assert!(clock.is_paused());
        assert!((clock.elapsed_at(t0 + secs(90)) - 600.0).abs() < TOLERANCE);

        clock.resume(t0 + secs(120));
        assert!((clock.elapsed_at(t0 + secs(120)) - 600.0).abs() < TOLERANCE);
        assert!((clock.elapsed_at(t0 + secs(130)) - 610.0).abs() < TOLERANCE);
    }

    #[test]
    fn negative_and_non_finite_inputs_clamp_to_zero() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);
        clock.set_elapsed(-30.0, t0);
        assert_eq!(clock.elapsed_at(t0), 0.0);
        clock.set_elapsed(f64::INFINITY, t0);
        assert_eq!(clock.elapsed_at(t0), 0.0);
    }

    #[test]
    fn reset_keeps_pause_flag() {
        let t0 = Instant::now();
        let mut clock = ClockState::started_at(t0);
        clock.pause(t0 + secs(10));
        clock.reset(t0 + secs(20));
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed_at(t0 + secs(30)), 0.0);
    }
}
