//! State management module
//!
//! The pace clock, its settings, and the shared state object that guards
//! both behind one lock.

pub mod app_state;
pub mod clock;
pub mod pace_state;
pub mod settings;
pub mod status;
pub mod time_source;
pub mod units;

// Re-export main types
pub use app_state::AppState;
pub use clock::ClockState;
pub use pace_state::PaceState;
pub use settings::{SettingsStore, SettingsUpdate, TimerSettings};
pub use status::{Reading, StatusPayload};
pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use units::{EndCount, RemainingSeconds, TotalSeconds};
