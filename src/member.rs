//! Member selection for composite values.
//!
//! A composite is written as its members in selection order. For derived
//! structs the member list is whatever `#[derive(Serialize)]` hands over:
//!
//! - fields in declaration order, stable for a given build
//! - fields marked `#[serde(skip)]`, `#[serde(skip_serializing)]` or a
//!   matching `#[serde(skip_serializing_if = "...")]` are left out
//! - `#[serde(rename = "name")]` replaces the emitted name; the name must not
//!   be empty
//!
//! Map entries are members too. Their keys are turned into member names by
//! [`MemberNameSerializer`]: text and characters as-is, numbers and booleans
//! in their notation form, enum members as their ordinal. Keys of any other
//! kind, dates included, fail with [`Error::KeyMustBeText`].
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsnotation::{select_members, Value};
//!
//! #[derive(Serialize)]
//! struct Row {
//!     #[serde(skip)]
//!     a: i32,
//!     #[serde(rename = "z")]
//!     b: i32,
//! }
//!
//! let members = select_members(&Row { a: 1, b: 5 }).unwrap();
//! assert_eq!(members, vec![("z".to_string(), Value::from(5))]);
//! ```

use crate::{number, token, EncodeOptions, Error, Kind, Result, Value};
use serde::ser::{self, Impossible, Serialize};

/// Returns the ordered `(name, value)` pairs a composite is written as.
///
/// Values that are not composite have no members and yield an empty list. A
/// data-carrying enum variant has one member, named after the variant.
///
/// # Errors
///
/// Fails if a member's `Serialize` impl fails, if a member name is empty, or
/// if nesting exceeds the default depth limit.
pub fn select_members<T>(value: &T) -> Result<Vec<(String, Value)>>
where
    T: ?Sized + Serialize,
{
    select_members_with_options(value, &EncodeOptions::default())
}

/// Like [`select_members`], with member values captured under `options.max_depth`.
///
/// # Errors
///
/// See [`select_members`].
pub fn select_members_with_options<T>(
    value: &T,
    options: &EncodeOptions,
) -> Result<Vec<(String, Value)>>
where
    T: ?Sized + Serialize,
{
    match crate::to_value_with_options(value, options)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Ok(Vec::new()),
    }
}

/// Checks a struct field name before it is emitted.
pub(crate) fn member_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        Err(Error::invalid_argument("member name must be non-empty"))
    } else {
        Ok(name)
    }
}

/// Serializer that turns a map key into member-name text.
///
/// Also used to read back the digits of an arbitrary-precision number.
pub(crate) struct MemberNameSerializer;

fn not_a_name(kind: Kind) -> Error {
    Error::KeyMustBeText(kind)
}

impl ser::Serializer for MemberNameSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(if v { "true" } else { "false" }.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        let mut out = String::new();
        number::write_f64(&mut out, v);
        Ok(out)
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(not_a_name(Kind::Sequence))
    }

    fn serialize_none(self) -> Result<String> {
        Err(not_a_name(Kind::Nullable))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_name(Kind::Nullable))
    }

    fn serialize_unit(self) -> Result<String> {
        Err(not_a_name(Kind::Null))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        if name == token::DB_NULL {
            Err(not_a_name(Kind::SentinelNull))
        } else {
            Err(not_a_name(Kind::Null))
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
    ) -> Result<String> {
        Ok(variant_index.to_string())
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        match name {
            token::DATE => Err(not_a_name(Kind::Temporal)),
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_name(Kind::Composite))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_name(Kind::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_name(Kind::Sequence))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_name(Kind::Sequence))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_name(Kind::Composite))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_name(Kind::Composite))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_a_name(Kind::Composite))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_name(Kind::Composite))
    }
}
