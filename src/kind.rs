//! Value classification.
//!
//! Every serializable value falls into exactly one [`Kind`]. The kind decides
//! how the encoder writes the value, and [`classify`] exposes the same
//! decision to callers.
//!
//! The serde data model does most of the work: each `Serializer` method maps
//! to one kind, and only the reserved names in [`crate::token`] need a second
//! look. Kinds are tested in a fixed priority order:
//!
//! 1. `()` and unit structs → [`Kind::Null`]
//! 2. `bool` → [`Kind::Bool`]
//! 3. `char` → [`Kind::Character`]
//! 4. integers, floats, big integers → [`Kind::Number`]
//! 5. `Option<T>` → [`Kind::Nullable`], before anything the payload would be
//! 6. unit enum variants → [`Kind::Enum`]
//! 7. `str`/`String` → [`Kind::Text`]
//! 8. dates (see [`crate::date`]) → [`Kind::Temporal`]
//! 9. [`DbNull`](crate::DbNull) → [`Kind::SentinelNull`], before the unit-struct fallthrough
//! 10. sequences, tuples, bytes → [`Kind::Sequence`]
//! 11. everything else → [`Kind::Composite`]
//!
//! Newtype structs are transparent and classify as their payload.

use crate::{token, Error, Result};
use serde::ser::{self, Serialize};
use std::fmt;

/// The semantic kind of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Character,
    Number,
    Nullable,
    Enum,
    Text,
    Temporal,
    SentinelNull,
    Sequence,
    Composite,
}

impl Kind {
    /// Lower-case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Character => "character",
            Kind::Number => "number",
            Kind::Nullable => "nullable",
            Kind::Enum => "enum",
            Kind::Text => "text",
            Kind::Temporal => "temporal",
            Kind::SentinelNull => "sentinel-null",
            Kind::Sequence => "sequence",
            Kind::Composite => "composite",
        }
    }

    /// Returns `true` for kinds that encode as `null` with no payload.
    #[inline]
    #[must_use]
    pub const fn is_null_like(self) -> bool {
        matches!(self, Kind::Null | Kind::SentinelNull)
    }

    /// Returns `true` for kinds that contain other values.
    #[inline]
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Composite)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `value` without encoding it.
///
/// Classification is total. Only the outermost shape is inspected, so member
/// accessors are never run; a `Serialize` impl that fails before describing
/// itself falls through to [`Kind::Composite`].
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::{classify, Kind};
///
/// assert_eq!(classify(&'x'), Kind::Character);
/// assert_eq!(classify(&Some(5)), Kind::Nullable);
/// assert_eq!(classify(&vec![1, 2]), Kind::Sequence);
/// assert_eq!(classify("text"), Kind::Text);
/// ```
#[must_use]
pub fn classify<T>(value: &T) -> Kind
where
    T: ?Sized + Serialize,
{
    value.serialize(Classifier).unwrap_or(Kind::Composite)
}

/// Serializer whose output is the kind of the value it is handed.
pub(crate) struct Classifier;

impl ser::Serializer for Classifier {
    type Ok = Kind;
    type Error = Error;

    type SerializeSeq = Shape;
    type SerializeTuple = Shape;
    type SerializeTupleStruct = Shape;
    type SerializeTupleVariant = Shape;
    type SerializeMap = Shape;
    type SerializeStruct = Shape;
    type SerializeStructVariant = Shape;

    fn serialize_bool(self, _v: bool) -> Result<Kind> {
        Ok(Kind::Bool)
    }

    fn serialize_i8(self, _v: i8) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_i16(self, _v: i16) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_i32(self, _v: i32) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_i64(self, _v: i64) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_i128(self, _v: i128) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_u8(self, _v: u8) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_u16(self, _v: u16) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_u32(self, _v: u32) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_u64(self, _v: u64) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_u128(self, _v: u128) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_f32(self, _v: f32) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_f64(self, _v: f64) -> Result<Kind> {
        Ok(Kind::Number)
    }

    fn serialize_char(self, _v: char) -> Result<Kind> {
        Ok(Kind::Character)
    }

    fn serialize_str(self, _v: &str) -> Result<Kind> {
        Ok(Kind::Text)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Kind> {
        Ok(Kind::Sequence)
    }

    fn serialize_none(self) -> Result<Kind> {
        Ok(Kind::Nullable)
    }

    fn serialize_some<T>(self, _value: &T) -> Result<Kind>
    where
        T: ?Sized + Serialize,
    {
        Ok(Kind::Nullable)
    }

    fn serialize_unit(self) -> Result<Kind> {
        Ok(Kind::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Kind> {
        if name == token::DB_NULL {
            Ok(Kind::SentinelNull)
        } else {
            Ok(Kind::Null)
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Kind> {
        Ok(Kind::Enum)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Kind>
    where
        T: ?Sized + Serialize,
    {
        match name {
            token::DATE => Ok(Kind::Temporal),
            token::NUMBER => Ok(Kind::Number),
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Kind>
    where
        T: ?Sized + Serialize,
    {
        Ok(Kind::Composite)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Shape> {
        Ok(Shape(Kind::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Shape> {
        Ok(Shape(Kind::Sequence))
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Shape> {
        Ok(Shape(Kind::Sequence))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Shape> {
        Ok(Shape(Kind::Composite))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Shape> {
        Ok(Shape(Kind::Composite))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Shape> {
        Ok(Shape(Kind::Composite))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Shape> {
        Ok(Shape(Kind::Composite))
    }
}

/// Compound state for [`Classifier`]: elements are skipped unread.
pub(crate) struct Shape(Kind);

impl ser::SerializeSeq for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_element<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeTuple for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_element<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleStruct for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleVariant for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeMap for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_key<T>(&mut self, _key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn serialize_value<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeStruct for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}

impl ser::SerializeStructVariant for Shape {
    type Ok = Kind;
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Kind> {
        Ok(self.0)
    }
}
