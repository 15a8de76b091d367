//! Headless display model
//!
//! Box geometry and per-tick frame contents. Drawing pixels is left to
//! whatever consumes the frames.

pub mod frame;
pub mod layout;

pub use frame::{BoxFrame, Frame, PointerFrame};
pub use layout::{BoardLayout, Rect, Screen};
