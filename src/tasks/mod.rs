//! Background tasks module
//!
//! Tasks that run alongside the HTTP server.

pub mod display_loop;

// Re-export main functions
pub use display_loop::{display_loop_task, DisplayLoop};
