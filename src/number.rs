//! Numeric values.
//!
//! Numbers are written as canonical base-10 text with no quotes. Non-finite
//! floats have no decimal form, so they are written as the script tokens
//! `NaN`, `Infinity` and `-Infinity`.
//!
//! Integers that do not fit in 64 bits are written digit for digit: `i128` and
//! `u128` directly, arbitrary-precision [`BigInt`]s through
//! [`Value::BigInt`](crate::Value::BigInt) or the [`serialize_bigint`] field
//! helper. Arbitrary-precision decimals (`rust_decimal::Decimal`,
//! `bigdecimal::BigDecimal`, or any type whose `Display` is a plain decimal)
//! keep every digit through [`serialize_decimal`].

use crate::token;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// A numeric value: an integer, a finite float, or a script special value.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::from(3.5);
/// let infinity = Number::from(f64::INFINITY);
///
/// assert!(integer.is_integer());
/// assert_eq!(float.as_f64(), 3.5);
/// assert_eq!(infinity, Number::Infinity);
/// assert_eq!(infinity.to_string(), "Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a finite floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is `Infinity`, `-Infinity` or `NaN`.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is whole and in range.
    ///
    /// ```rust
    /// use serde_jsnotation::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::NaN.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                // 2^63 is the first float past i64::MAX
                if f.fract() == 0.0
                    && *f >= i64::MIN as f64
                    && *f < 9_223_372_036_854_775_808.0
                {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            other => serializer.serialize_f64(other.as_f64()),
        }
    }
}

/// Appends the notation form of a float.
pub(crate) fn write_f64(out: &mut String, v: f64) {
    out.push_str(&Number::from(v).to_string());
}

/// `serialize_with` helper that keeps every digit of a [`BigInt`].
///
/// ```rust
/// use num_bigint::BigInt;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Ledger {
///     #[serde(serialize_with = "serde_jsnotation::number::serialize_bigint")]
///     total: BigInt,
/// }
///
/// let ledger = Ledger { total: "123456789012345678901234567890".parse().unwrap() };
/// assert_eq!(
///     serde_jsnotation::to_string(&ledger).unwrap(),
///     r#"{"total":123456789012345678901234567890}"#
/// );
/// ```
pub fn serialize_bigint<S>(n: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_newtype_struct(token::NUMBER, &n.to_string())
}

/// `serialize_with` helper for arbitrary-precision decimals.
///
/// The `Display` output is written unquoted, digit for digit. It must be a
/// plain decimal literal (optional `-`, digits, optional `.` and digits);
/// anything else fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Rate {
///     #[serde(serialize_with = "serde_jsnotation::number::serialize_decimal")]
///     value: String,
/// }
///
/// let rate = Rate { value: "0.1000000000000000055511151231257827".to_string() };
/// assert_eq!(
///     serde_jsnotation::to_string(&rate).unwrap(),
///     r#"{"value":0.1000000000000000055511151231257827}"#
/// );
/// ```
pub fn serialize_decimal<T, S>(n: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ?Sized + fmt::Display,
    S: Serializer,
{
    serializer.serialize_newtype_struct(token::NUMBER, &n.to_string())
}

/// Returns `true` if `text` is a plain decimal literal: an optional `-`,
/// digits, and an optional `.` followed by more digits.
pub(crate) fn is_number_text(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match body.split_once('.') {
        Some((int, frac)) => digits(int) && digits(frac),
        None => digits(body),
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical() {
        assert_eq!(Number::Integer(-7).to_string(), "-7");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
        assert_eq!(Number::Float(2.0).to_string(), "2");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(Number::from(f64::NAN), Number::NaN);
        assert_eq!(Number::from(f64::NEG_INFINITY), Number::NegativeInfinity);
        assert_eq!(Number::NegativeInfinity.to_string(), "-Infinity");
        assert!(Number::NaN.is_special());
        assert!(!Number::Float(1.0).is_special());
    }

    #[test]
    fn test_write_f64() {
        let mut out = String::new();
        write_f64(&mut out, 0.25);
        out.push(',');
        write_f64(&mut out, f64::INFINITY);
        assert_eq!(out, "0.25,Infinity");
    }

    #[test]
    fn test_number_text() {
        assert!(is_number_text("0"));
        assert!(is_number_text("-123456789012345678901234567890"));
        assert!(is_number_text("1.25"));
        assert!(!is_number_text(""));
        assert!(!is_number_text("-"));
        assert!(!is_number_text("1."));
        assert!(!is_number_text(".5"));
        assert!(!is_number_text("12a"));
        assert!(!is_number_text("1e5"));
    }

    #[test]
    fn test_as_i64_range() {
        assert_eq!(Number::Float(-9_223_372_036_854_775_808.0).as_i64(), Some(i64::MIN));
        assert_eq!(Number::Float(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(
            Number::Float(9_223_372_036_854_774_784.0).as_i64(),
            Some(9_223_372_036_854_774_784)
        );
        assert_eq!(Number::Float(1e300).as_i64(), None);
    }

    #[test]
    fn test_serialize_decimal() {
        #[derive(Serialize)]
        struct Price {
            #[serde(serialize_with = "serialize_decimal")]
            amount: f32,
        }

        let price = Price { amount: 2.5 };
        assert_eq!(crate::to_string(&price).unwrap(), r#"{"amount":2.5}"#);

        let bad = Price { amount: f32::NAN };
        assert!(matches!(
            crate::to_string(&bad).unwrap_err(),
            crate::Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_from_ints() {
        assert_eq!(Number::from(200u8), Number::Integer(200));
        assert_eq!(Number::from(u32::MAX), Number::Integer(4_294_967_295));
        assert_eq!(Number::from(1.5f32), Number::Float(1.5));
    }
}
