//! # serde_jsnotation
//!
//! A Serde serializer for a JSON-superset script notation.
//!
//! ## What is the notation?
//!
//! The notation is JSON plus a few script-level productions, meant to be
//! evaluated as a script literal on the receiving end:
//!
//! - **Dates** are `new Date(N)` constructor calls, `N` in epoch milliseconds
//! - **Enum members** are their ordinal, never their name
//! - **Database nulls** ([`DbNull`]) are `null`, like `None`
//! - **Text** uses script escapes, including `\'`, `\v` and `\0`
//! - **Non-finite floats** are `NaN`, `Infinity` and `-Infinity`
//!
//! Objects, arrays, strings, numbers, booleans and `null` read the same as in
//! JSON. Consumers that need strict JSON can switch dates to bare numbers with
//! [`EncodeOptions::json_compatible`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsnotation::to_string;
//!
//! #[derive(Serialize)]
//! enum Role {
//!     Guest,
//!     Admin,
//! }
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     #[serde(rename = "displayName")]
//!     name: String,
//!     #[serde(skip)]
//!     password: String,
//!     role: Role,
//!     manager: Option<u32>,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "O'Brien".to_string(),
//!     password: "secret".to_string(),
//!     role: Role::Admin,
//!     manager: None,
//! };
//!
//! assert_eq!(
//!     to_string(&user).unwrap(),
//!     r#"{"id":123,"displayName":"O\'Brien","role":1,"manager":null}"#
//! );
//! ```
//!
//! ## Components
//!
//! - [`escape`](escape()) - text escaping
//! - [`date`] - epoch-millisecond conversion and date field helpers
//! - [`classify`] - the [`Kind`] a value encodes as
//! - [`select_members`] - the `(name, value)` pairs a composite encodes as
//! - [`Serializer`] - the recursive writer that puts them together
//!
//! ## Cyclic graphs
//!
//! Values are walked without tracking identity, so a graph that reaches
//! itself through `Rc`/`RefCell` would recurse forever. Nesting of sequences
//! and composites is capped at [`EncodeOptions::max_depth`]
//! ([`options::DEFAULT_MAX_DEPTH`] by default); past it encoding fails with
//! [`Error::DepthLimitExceeded`] instead of overflowing the stack. `Option`,
//! smart pointers and newtypes do not count toward the cap.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in public API

pub mod date;
pub mod error;
pub mod escape;
pub mod kind;
pub mod macros;
pub mod map;
pub mod member;
pub mod number;
pub mod options;
pub mod sentinel;
pub mod ser;
mod token;
pub mod value;

pub use date::Timestamp;
pub use error::{Error, Result};
pub use escape::{escape, escape_into};
pub use kind::{classify, Kind};
pub use map::Map;
pub use member::{select_members, select_members_with_options};
pub use number::Number;
pub use options::{DateStyle, EncodeOptions};
pub use sentinel::DbNull;
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use log::trace;
use serde::Serialize;
use std::io;

/// Encode any `T: Serialize` as a notation string.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// assert_eq!(to_string(&vec![true, false]).unwrap(), "[true,false]");
/// ```
///
/// # Errors
///
/// Returns an error if a `Serialize` impl fails, a member name is empty, a
/// map key has no text form, or nesting exceeds the depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Encode any `T: Serialize` as a notation string with custom options.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    // Pre-allocate with reasonable capacity to reduce reallocations
    let mut output = String::with_capacity(128);
    to_string_into_with_options(&mut output, value, options)?;
    Ok(output)
}

/// Append the encoding of `value` to a caller-owned buffer.
///
/// The buffer is not rolled back on failure; it keeps whatever was written
/// before the error.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::to_string_into;
///
/// let mut buffer = String::from("var ids = ");
/// to_string_into(&mut buffer, &[1, 2, 3]).unwrap();
/// buffer.push(';');
/// assert_eq!(buffer, "var ids = [1,2,3];");
/// ```
///
/// # Errors
///
/// See [`to_string`].
pub fn to_string_into<T>(buffer: &mut String, value: &T) -> Result<()>
where
    T: ?Sized + Serialize,
{
    to_string_into_with_options(buffer, value, EncodeOptions::default())
}

/// Append the encoding of `value` to a caller-owned buffer with custom options.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_string_into_with_options<T>(
    buffer: &mut String,
    value: &T,
    options: EncodeOptions,
) -> Result<()>
where
    T: ?Sized + Serialize,
{
    trace!("encoding {}", std::any::type_name::<T>());
    let mut serializer = Serializer::with_options(buffer, options);
    value.serialize(&mut serializer)
}

/// Encode any `T: Serialize` to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Some("hi")).unwrap();
/// assert_eq!(buffer, br#""hi""#);
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Encode any `T: Serialize` to a writer with custom options.
///
/// Nothing is written unless encoding succeeds.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Capture any `T: Serialize` as a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::{to_value, Value};
///
/// let value = to_value(&vec![Some(1), None]).unwrap();
/// assert_eq!(value, Value::Array(vec![Value::from(1), Value::Null]));
/// ```
///
/// # Errors
///
/// Returns an error if a `Serialize` impl fails or nesting exceeds the
/// default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    to_value_with_options(value, &EncodeOptions::default())
}

/// Capture any `T: Serialize` as a [`Value`] tree, nesting limited by
/// `options.max_depth`.
///
/// ```rust
/// use serde_jsnotation::{to_value_with_options, EncodeOptions, Error};
///
/// let nested = vec![vec![vec![1]]];
/// let options = EncodeOptions::new().with_max_depth(2);
/// assert_eq!(
///     to_value_with_options(&nested, &options).unwrap_err(),
///     Error::DepthLimitExceeded { limit: 2 }
/// );
/// assert!(to_value_with_options(&nested, &options.without_depth_limit()).is_ok());
/// ```
///
/// # Errors
///
/// See [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with_options<T>(value: &T, options: &EncodeOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer::with_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_encode_point() {
        let point = Point { x: 1, y: -2 };
        assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":-2}"#);
    }

    #[test]
    fn test_encode_into_appends() {
        let mut buffer = String::from("[");
        to_string_into(&mut buffer, &Point { x: 0, y: 0 }).unwrap();
        buffer.push(',');
        to_string_into(&mut buffer, &Point { x: 1, y: 1 }).unwrap();
        buffer.push(']');
        assert_eq!(buffer, r#"[{"x":0,"y":0},{"x":1,"y":1}]"#);
    }

    #[test]
    fn test_to_value_roundtrips_text() {
        let point = Point { x: 3, y: 4 };
        let value = to_value(&point).unwrap();
        assert_eq!(to_string(&value).unwrap(), to_string(&point).unwrap());
    }

    #[test]
    fn test_to_writer() {
        let mut out = Vec::new();
        to_writer(&mut out, &Point { x: 5, y: 6 }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"{"x":5,"y":6}"#);
    }

    #[test]
    fn test_to_writer_reports_io_errors() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Broken, &1).unwrap_err();
        assert!(matches!(err, Error::Io(msg) if msg.contains("disk full")));
    }
}
