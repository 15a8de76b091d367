//! Request parameter parsing
//!
//! Raw query strings and JSON bodies become validated values here; nothing
//! past this module sees unchecked input.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{PaceError, Result},
    state::{EndCount, RemainingSeconds, SettingsUpdate, TotalSeconds},
    utils::parse_clock,
};

/// `?seconds=<number>` or `?time=H:MM:SS`; `seconds` wins when both are set
#[derive(Debug, Default, Deserialize)]
pub struct TimeQuery {
    pub seconds: Option<String>,
    pub time: Option<String>,
}

impl TimeQuery {
    fn raw_seconds(&self) -> Result<f64> {
        match (&self.seconds, &self.time) {
            (Some(seconds), _) => parse_number(seconds),
            (None, Some(time)) => parse_clock(time).map(|s| s as f64),
            (None, None) => Err(PaceError::MissingTimeParam),
        }
    }

    pub fn remaining(&self) -> Result<RemainingSeconds> {
        RemainingSeconds::new(self.raw_seconds()?)
    }

    pub fn total(&self) -> Result<TotalSeconds> {
        TotalSeconds::from_f64(self.raw_seconds()?)
    }
}

/// `?count=N`
#[derive(Debug, Default, Deserialize)]
pub struct EndsQuery {
    pub count: Option<String>,
}

impl EndsQuery {
    pub fn end_count(&self) -> Result<EndCount> {
        let raw = self
            .count
            .as_deref()
            .map(str::trim)
            .filter(|count| !count.is_empty())
            .ok_or(PaceError::MissingCount)?;
        let count = raw
            .parse::<i64>()
            .map_err(|_| PaceError::InvalidNumber(raw.to_string()))?;
        EndCount::from_i64(count)
    }
}

/// Body of `POST /config`; every field is optional.
///
/// Fields stay raw JSON so that a wrong type is reported against the field
/// rather than as an unreadable body. Counts accept integers, floats
/// (truncated) and integer strings.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigUpdateRequest {
    pub total_seconds: Option<Value>,
    pub num_ends: Option<Value>,
    pub logo_url: Option<Value>,
    pub message: Option<Value>,
}

impl ConfigUpdateRequest {
    pub fn into_update(self) -> Result<SettingsUpdate> {
        let total_seconds = self
            .total_seconds
            .as_ref()
            .map(|raw| {
                let total = parse_integer(raw)?;
                if total <= 0 {
                    Err(PaceError::NonPositiveTotal)
                } else {
                    TotalSeconds::new(total as u64)
                }
            })
            .transpose()?;
        let num_ends = self
            .num_ends
            .as_ref()
            .map(|raw| parse_integer(raw).and_then(EndCount::from_i64))
            .transpose()?;

        let update = SettingsUpdate {
            total_seconds,
            num_ends,
            logo_url: self.logo_url.map(into_text),
            message: self.message.map(into_text),
        };
        if update.is_empty() {
            return Err(PaceError::EmptyUpdate);
        }
        Ok(update)
    }
}

fn parse_integer(raw: &Value) -> Result<i64> {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
            .ok_or_else(|| PaceError::InvalidNumber(number.to_string())),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .map_err(|_| PaceError::InvalidNumber(trimmed.to_string()))
        }
        other => Err(PaceError::InvalidNumber(other.to_string())),
    }
}

fn into_text(raw: Value) -> String {
    match raw {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn parse_number(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PaceError::InvalidNumber(trimmed.to_string())),
    }
}
