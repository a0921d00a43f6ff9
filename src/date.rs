//! Temporal values.
//!
//! Dates are written as epoch milliseconds: the instant converted to UTC,
//! minus `1970-01-01T00:00:00Z`, truncated toward zero to whole milliseconds.
//! The encoder wraps the number in a `new Date(N)` constructor call (or emits
//! it bare under [`DateStyle::EpochMillis`](crate::DateStyle::EpochMillis)).
//!
//! serde has no date kind of its own, and chrono's `Serialize` impl writes an
//! RFC 3339 string. To get a date classified as temporal, route it through
//! this module:
//!
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Event {
//!     #[serde(serialize_with = "serde_jsnotation::date::serialize")]
//!     at: DateTime<Utc>,
//!     #[serde(serialize_with = "serde_jsnotation::date::option::serialize")]
//!     ended: Option<DateTime<Utc>>,
//! }
//!
//! let event = Event { at: Utc.timestamp_opt(1, 0).unwrap(), ended: None };
//! assert_eq!(
//!     serde_jsnotation::to_string(&event).unwrap(),
//!     r#"{"at":new Date(1000),"ended":null}"#
//! );
//! ```
//!
//! Standalone values can be wrapped in [`Timestamp`] instead.

use crate::token;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::time::SystemTime;

const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Milliseconds between the Unix epoch and `dt`, truncated toward zero.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use serde_jsnotation::date::to_epoch_millis;
///
/// let dt = Utc.timestamp_opt(1, 999_999).unwrap();
/// assert_eq!(to_epoch_millis(&dt), 1000);
/// ```
#[must_use]
pub fn to_epoch_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    let secs = dt.timestamp();
    let nanos = i64::from(dt.timestamp_subsec_nanos());
    if secs < 0 && nanos > 0 {
        // timestamp() floors; step back toward zero before dropping sub-millis
        (secs + 1) * 1000 - (NANOS_PER_SEC - nanos) / NANOS_PER_MILLI
    } else {
        secs * 1000 + nanos / NANOS_PER_MILLI
    }
}

/// Epoch milliseconds of a zone-less date-time, read as UTC.
#[must_use]
pub fn naive_to_epoch_millis(dt: &NaiveDateTime) -> i64 {
    to_epoch_millis(&Utc.from_utc_datetime(dt))
}

/// Epoch milliseconds of a system clock reading.
#[must_use]
pub fn system_time_to_epoch_millis(time: SystemTime) -> i64 {
    to_epoch_millis(&DateTime::<Utc>::from(time))
}

/// Serializes an already computed epoch-millisecond count as a date.
pub(crate) struct EpochMillis(pub(crate) i64);

impl Serialize for EpochMillis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(token::DATE, &self.0)
    }
}

/// A date-time that serializes as a temporal value.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use serde_jsnotation::{to_string, Timestamp};
///
/// let ts = Timestamp(Utc.timestamp_opt(0, 0).unwrap());
/// assert_eq!(to_string(&ts).unwrap(), "new Date(0)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp<Tz: TimeZone = Utc>(pub DateTime<Tz>);

impl<Tz: TimeZone> Timestamp<Tz> {
    /// Epoch milliseconds of the wrapped instant.
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        to_epoch_millis(&self.0)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp<Tz> {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp(dt)
    }
}

impl<Tz: TimeZone> Serialize for Timestamp<Tz> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EpochMillis(self.epoch_millis()).serialize(serializer)
    }
}

/// `serialize_with` helper for `DateTime` fields.
pub fn serialize<S, Tz>(dt: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    Tz: TimeZone,
{
    EpochMillis(to_epoch_millis(dt)).serialize(serializer)
}

/// `serialize_with` helpers for `Option<DateTime>` fields.
pub mod option {
    use super::{to_epoch_millis, EpochMillis};
    use chrono::{DateTime, TimeZone};
    use serde::Serializer;

    pub fn serialize<S, Tz>(dt: &Option<DateTime<Tz>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        Tz: TimeZone,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&EpochMillis(to_epoch_millis(dt))),
            None => serializer.serialize_none(),
        }
    }
}
