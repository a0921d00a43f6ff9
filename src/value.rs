//! Dynamic value representation.
//!
//! [`Value`] holds an already classified value tree. It is what
//! [`to_value`](crate::to_value) and [`select_members`](crate::select_members)
//! return, and it encodes exactly like the value it was captured from.
//!
//! Capturing is lossy only where the output is unaffected: characters become
//! one-character text, enum members become their ordinal, and optionals
//! collapse to `Null` or their payload. Arbitrary-precision numbers keep
//! their digits, in [`Value::BigInt`] or as the text of [`Value::Decimal`].
//!
//! ```rust
//! use serde_jsnotation::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(value.as_object().map(|o| o.len()), Some(2));
//! assert_eq!(value.to_string(), r#"{"x":10,"y":20}"#);
//! ```

use crate::date::{to_epoch_millis, EpochMillis};
use crate::{number, DbNull, EncodeOptions, Error, Kind, Map, Number};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically typed, already classified value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    /// An arbitrary-precision decimal, kept as its literal digits.
    Decimal(String),
    Text(String),
    Date(DateTime<Utc>),
    DbNull,
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// The [`Kind`] this value classifies as.
    ///
    /// ```rust
    /// use serde_jsnotation::{Kind, Value};
    ///
    /// assert_eq!(Value::DbNull.kind(), Kind::SentinelNull);
    /// assert_eq!(Value::from("x").kind(), Kind::Text);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) | Value::BigInt(_) | Value::Decimal(_) => Kind::Number,
            Value::Text(_) => Kind::Text,
            Value::Date(_) => Kind::Temporal,
            Value::DbNull => Kind::SentinelNull,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Composite,
        }
    }

    /// Returns `true` for both `Null` and the `DbNull` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::DbNull)
    }

    #[inline]
    #[must_use]
    pub const fn is_db_null(&self) -> bool {
        matches!(self, Value::DbNull)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_) | Value::BigInt(_) | Value::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is text, returns it.
    ///
    /// ```rust
    /// use serde_jsnotation::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a whole number that fits in an `i64`, returns it.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            Value::BigInt(bi) => i64::try_from(bi).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// Epoch milliseconds of a date value.
    #[must_use]
    pub fn epoch_millis(&self) -> Option<i64> {
        self.as_date().map(to_epoch_millis)
    }

    /// If the value is an arbitrary-precision decimal, returns its digits.
    #[must_use]
    pub fn as_decimal(&self) -> Option<&str> {
        match self {
            Value::Decimal(digits) => Some(digits),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }
}

/// Formats the value in notation.
///
/// A `Value` is a finite tree, so it is written without a depth limit.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        let options = EncodeOptions::new().without_depth_limit();
        crate::to_string_into_with_options(&mut text, self, options).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::BigInt(bi) => number::serialize_bigint(bi, serializer),
            Value::Decimal(digits) => number::serialize_decimal(digits, serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Date(dt) => EpochMillis(to_epoch_millis(dt)).serialize(serializer),
            Value::DbNull => DbNull.serialize(serializer),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_i64().ok_or_else(|| {
            Error::invalid_argument(&format!("expected integer, found {}", value.kind()))
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::BigInt(ref bi) => bi
                .to_string()
                .parse()
                .map_err(|_| Error::invalid_argument("integer out of float range")),
            Value::Decimal(ref digits) => digits
                .parse()
                .map_err(|_| Error::invalid_argument("decimal out of float range")),
            other => Err(Error::invalid_argument(&format!(
                "expected number, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::invalid_argument(&format!(
                "expected bool, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(Error::invalid_argument(&format!(
                "expected text, found {}",
                other.kind()
            ))),
        }
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<DbNull> for Value {
    fn from(_: DbNull) -> Self {
        Value::DbNull
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(i64::try_from(Value::BigInt(BigInt::from(-9))).unwrap(), -9);
        assert!(i64::try_from(Value::from("42")).is_err());
    }

    #[test]
    fn test_tryfrom_others() {
        assert_eq!(f64::try_from(Value::from(2.5)).unwrap(), 2.5);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert_eq!(String::try_from(Value::from('c')).unwrap(), "c");
        assert!(String::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_from_u64_overflows_to_bigint() {
        assert_eq!(Value::from(7u64), Value::Number(Number::Integer(7)));
        assert_eq!(Value::from(u64::MAX), Value::BigInt(BigInt::from(u64::MAX)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_kinds() {
        let dt = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(Value::from(dt).kind(), Kind::Temporal);
        assert_eq!(Value::from(DbNull).kind(), Kind::SentinelNull);
        assert_eq!(Value::Array(vec![]).kind(), Kind::Sequence);
        assert_eq!(Value::Object(Map::new()).kind(), Kind::Composite);
        assert!(Value::DbNull.is_null());
        assert!(Value::DbNull.is_db_null());
        assert!(!Value::Null.is_db_null());
    }

    #[test]
    fn test_display_of_deep_trees() {
        let mut deep = Value::from(0);
        for _ in 0..300 {
            deep = Value::Array(vec![deep]);
        }
        let text = deep.to_string();
        assert_eq!(text.len(), 601);
        assert!(text.starts_with("[[[") && text.contains("[0]") && text.ends_with("]]]"));
    }

    #[test]
    fn test_decimal_digits_are_kept() {
        let value = Value::Decimal("-0.1000000000000000055511151231257827".to_string());
        assert_eq!(value.kind(), Kind::Number);
        assert!(value.is_number());
        assert_eq!(value.to_string(), "-0.1000000000000000055511151231257827");
        assert_eq!(value.as_decimal(), Some("-0.1000000000000000055511151231257827"));
        assert_eq!(f64::try_from(value).unwrap(), -0.1);
    }

    #[test]
    fn test_display_is_notation() {
        let dt = Utc.timestamp_opt(2, 0).unwrap();
        let value = Value::Array(vec![
            Value::from(dt),
            Value::DbNull,
            Value::from("a'b"),
            Value::BigInt("99999999999999999999".parse().unwrap()),
        ]);
        assert_eq!(
            value.to_string(),
            r#"[new Date(2000),null,"a\'b",99999999999999999999]"#
        );
    }
}
