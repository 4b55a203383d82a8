//! OHLCV market snapshot
//!
//! A snapshot is built from loosely typed input (every field optional, as it
//! arrives over the wire) and only exists once all invariants hold:
//! `open > 0`, `high > 0`, `low > 0`, `volume >= 0`, `high >= low`.

use thiserror::Error;

/// Wire names of the snapshot fields, used in validation messages
pub mod field {
    pub const OPEN: &str = "open_price";
    pub const CLOSE: &str = "close_price";
    pub const HIGH: &str = "high_price";
    pub const LOW: &str = "low_price";
    pub const VOLUME: &str = "volume";
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("Missing or invalid required field: {0}")]
    MissingField(&'static str),

    #[error("Price values must be positive and volume must be non-negative")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("High price cannot be less than low price")]
    HighBelowLow { high: f64, low: f64 },
}

/// Unvalidated snapshot fields
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotInput {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl SnapshotInput {
    /// Validate into a [`MarketSnapshot`]
    ///
    /// Checks run in a fixed order: presence of the required fields, value
    /// ranges, then `high >= low`. The first violation wins.
    pub fn validate(&self) -> Result<MarketSnapshot, SnapshotError> {
        let open = self.open.ok_or(SnapshotError::MissingField(field::OPEN))?;
        let high = self.high.ok_or(SnapshotError::MissingField(field::HIGH))?;
        let low = self.low.ok_or(SnapshotError::MissingField(field::LOW))?;
        let volume = self
            .volume
            .ok_or(SnapshotError::MissingField(field::VOLUME))?;

        MarketSnapshot::new(open, high, low, self.close, volume)
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, SnapshotError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SnapshotError::OutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, SnapshotError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SnapshotError::OutOfRange { field, value })
    }
}

/// Validated OHLCV reading for one time window
///
/// Values are kept exactly as received; any finite positive price is valid,
/// however large or small.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl MarketSnapshot {
    /// Enforces the snapshot invariants. A missing or zero `close` defaults
    /// to `open`.
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: Option<f64>,
        volume: f64,
    ) -> Result<Self, SnapshotError> {
        let open = positive(field::OPEN, open)?;
        let high = positive(field::HIGH, high)?;
        let low = positive(field::LOW, low)?;
        let volume = non_negative(field::VOLUME, volume)?;

        // A zero close is treated like a missing one
        let close = match close {
            None => open,
            Some(c) if c == 0.0 => open,
            Some(c) => positive(field::CLOSE, c)?,
        };

        if high < low {
            return Err(SnapshotError::HighBelowLow { high, low });
        }

        Ok(MarketSnapshot {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn close(&self) -> f64 {
        self.close
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// `(high - low) / open`, `+inf` when the quotient overflows
    pub fn relative_range(&self) -> f64 {
        (self.high - self.low) / self.open
    }
}
