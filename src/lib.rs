//! Pace Timer - A shared pace clock with segment progress
//!
//! This library provides the clock that tracks elapsed time with pause,
//! resume and arbitrary overrides, the mapping of that time onto a row of
//! progress segments ("ends"), and the HTTP API and display loop that share it.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod progress;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::PaceError;
pub use progress::{compute_progress, ProgressSnapshot};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
