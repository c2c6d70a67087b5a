//! Booking policy configuration

use chrono::FixedOffset;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Business timezone and store call bound.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Business timezone as minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Bound on one booking store call, in seconds
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,
}

impl BookingConfig {
    /// Business timezone used for every calendar computation.
    pub fn zone(&self) -> Result<FixedOffset, ValidationError> {
        if !(-720..=840).contains(&self.utc_offset_minutes) {
            return Err(ValidationError::InvalidUtcOffset);
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or(ValidationError::InvalidUtcOffset)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.zone()?;
        if self.store_timeout_secs == 0 || self.store_timeout_secs > 120 {
            return Err(ValidationError::InvalidStoreTimeout);
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            store_timeout_secs: default_store_timeout(),
        }
    }
}

fn default_store_timeout() -> u64 {
    10
}
