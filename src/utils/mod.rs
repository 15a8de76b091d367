//! Utility functions module
//!
//! Clock-face text helpers and process signal handling.

pub mod clock_format;
pub mod signals;

// Re-export main functions
pub use clock_format::{format_clock, parse_clock};
pub use signals::shutdown_signal;
