//! Validated values that are allowed to reach the pace clock

use std::num::{NonZeroU32, NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::error::{PaceError, Result};

/// A target duration; always at least one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TotalSeconds(NonZeroU64);

impl TotalSeconds {
    pub const fn from_nonzero(seconds: NonZeroU64) -> Self {
        Self(seconds)
    }

    pub fn new(seconds: u64) -> Result<Self> {
        NonZeroU64::new(seconds)
            .map(Self)
            .ok_or(PaceError::NonPositiveTotal)
    }

    /// Truncates fractional seconds, then rejects anything below one.
    pub fn from_f64(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(PaceError::InvalidNumber(seconds.to_string()));
        }
        let whole = seconds.trunc();
        if whole < 1.0 {
            return Err(PaceError::NonPositiveTotal);
        }
        Self::new(whole as u64)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    pub fn as_f64(self) -> f64 {
        self.get() as f64
    }
}

impl TryFrom<u64> for TotalSeconds {
    type Error = PaceError;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TotalSeconds> for u64 {
    fn from(value: TotalSeconds) -> Self {
        value.get()
    }
}

/// Number of progress segments; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EndCount(NonZeroU32);

impl EndCount {
    pub const fn from_nonzero(count: NonZeroU32) -> Self {
        Self(count)
    }

    pub fn new(count: u32) -> Result<Self> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(PaceError::EndCountTooSmall)
    }

    pub fn from_i64(count: i64) -> Result<Self> {
        if count < 1 {
            return Err(PaceError::EndCountTooSmall);
        }
        let count = u32::try_from(count).map_err(|_| PaceError::InvalidNumber(count.to_string()))?;
        Self::new(count)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for EndCount {
    type Error = PaceError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EndCount> for u32 {
    fn from(value: EndCount) -> Self {
        value.get()
    }
}

/// Requested remaining time. Any finite value is accepted; the clock clamps
/// it into `[0, total]` when applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainingSeconds(f64);

impl RemainingSeconds {
    pub fn new(seconds: f64) -> Result<Self> {
        if seconds.is_finite() {
            Ok(Self(seconds))
        } else {
            Err(PaceError::InvalidNumber(seconds.to_string()))
        }
    }

    pub fn clamped_to(self, total: TotalSeconds) -> f64 {
        self.0.clamp(0.0, total.as_f64())
    }
}
