//! Discounts
//!
//! The discount mapping is stored and served verbatim: product id to an
//! object carrying `percent` and `expiresAt` (epoch milliseconds). Readers
//! interpret each entry on demand, so an entry that does not interpret
//! cleanly is simply inactive.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Key holding the discount percentage inside a mapping entry.
pub const PERCENT_KEY: &str = "percent";

/// Key holding the expiry timestamp (epoch milliseconds) inside a mapping entry.
pub const EXPIRES_AT_KEY: &str = "expiresAt";

/// Errors raised while building discount records or mappings.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// The percentage is outside the open interval (0, 100).
    #[error("discount percent must be between 0 and 100 (exclusive), got {0}")]
    PercentOutOfRange(Decimal),

    /// The duration in days is zero or negative.
    #[error("discount duration must be at least one day, got {0}")]
    InvalidDuration(i64),

    /// The expiry could not be represented as a timestamp.
    #[error("discount expiry is out of range")]
    ExpiryOutOfRange,

    /// A mapping payload was not a JSON object.
    #[error("discount mapping must be a JSON object")]
    NotAnObject,
}

/// A single interpreted discount: a percentage that applies until `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountRecord {
    percent: Decimal,
    expires_at: Timestamp,
}

impl DiscountRecord {
    /// Create a record.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentOutOfRange`] unless `0 < percent < 100`.
    pub fn new(percent: Decimal, expires_at: Timestamp) -> Result<Self, DiscountError> {
        if percent <= Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
            return Err(DiscountError::PercentOutOfRange(percent));
        }

        Ok(Self {
            percent,
            expires_at,
        })
    }

    /// Create a record that runs for `days` whole days from `now`.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::PercentOutOfRange`]: `percent` is not in (0, 100).
    /// - [`DiscountError::InvalidDuration`]: `days` is not positive.
    /// - [`DiscountError::ExpiryOutOfRange`]: the expiry overflows a timestamp.
    pub fn for_days(percent: Decimal, days: i64, now: Timestamp) -> Result<Self, DiscountError> {
        if days <= 0 {
            return Err(DiscountError::InvalidDuration(days));
        }

        let expires_at = SignedDuration::from_hours(24)
            .checked_mul(i32::try_from(days).map_err(|_err| DiscountError::ExpiryOutOfRange)?)
            .and_then(|duration| now.checked_add(duration).ok())
            .ok_or(DiscountError::ExpiryOutOfRange)?;

        Self::new(percent, expires_at)
    }

    /// Interpret a raw mapping entry.
    ///
    /// Returns `None` for anything malformed: a non-object, a missing or
    /// non-numeric field, a percentage outside (0, 100), or an expiry that is
    /// not a representable epoch-millisecond timestamp.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;

        let percent = entry
            .get(PERCENT_KEY)
            .and_then(Value::as_f64)
            .and_then(Decimal::from_f64)?;

        let expires_at = entry
            .get(EXPIRES_AT_KEY)
            .and_then(|raw| raw.as_i64().or_else(|| raw.as_f64().and_then(f64_millis)))
            .and_then(|millis| Timestamp::from_millisecond(millis).ok())?;

        Self::new(percent, expires_at).ok()
    }

    /// Percentage taken off the original price.
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Instant the discount stops applying.
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// A record is active strictly before its expiry.
    pub fn is_active(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }

    /// Serialize back into the stored entry shape.
    pub fn to_value(&self) -> Value {
        let percent = if self.percent.fract().is_zero() {
            self.percent.to_i64().map(Number::from)
        } else {
            self.percent.to_f64().and_then(Number::from_f64)
        };

        let mut entry = Map::new();

        entry.insert(
            PERCENT_KEY.to_string(),
            percent.map_or(Value::Null, Value::Number),
        );
        entry.insert(
            EXPIRES_AT_KEY.to_string(),
            Value::from(self.expires_at.as_millisecond()),
        );

        Value::Object(entry)
    }
}

fn f64_millis(millis: f64) -> Option<i64> {
    if !millis.is_finite() {
        return None;
    }

    millis.trunc().to_i64()
}

/// Product id to discount entry, kept exactly as it was written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountMapping(Map<String, Value>);

impl DiscountMapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::NotAnObject`] unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self, DiscountError> {
        match value {
            Value::Object(entries) => Ok(Self(entries)),
            _ => Err(DiscountError::NotAnObject),
        }
    }

    /// Unwrap into the raw JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Borrow the raw entries.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Number of stored entries, expired or malformed ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpreted record for a product, whether or not it is still active.
    ///
    /// Keys are compared as strings, so `1` and `"1"` find the same entry.
    pub fn record_for(&self, product_id: impl fmt::Display) -> Option<DiscountRecord> {
        self.0
            .get(&product_id.to_string())
            .and_then(DiscountRecord::from_value)
    }

    /// Record for a product only if it is active at `now`.
    pub fn active_for(&self, product_id: impl fmt::Display, now: Timestamp) -> Option<DiscountRecord> {
        self.record_for(product_id)
            .filter(|record| record.is_active(now))
    }

    /// Replace one product's entry, leaving every other entry untouched.
    pub fn set(&mut self, product_id: impl fmt::Display, record: DiscountRecord) {
        self.0.insert(product_id.to_string(), record.to_value());
    }
}

impl From<DiscountMapping> for Value {
    fn from(mapping: DiscountMapping) -> Self {
        mapping.into_value()
    }
}

impl TryFrom<Value> for DiscountMapping {
    type Error = DiscountError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
