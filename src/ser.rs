//! Notation encoding.
//!
//! This module provides the [`Serializer`] that writes Rust values as
//! notation text, and the [`ValueSerializer`] behind [`to_value`](crate::to_value).
//!
//! ## Output by kind
//!
//! | kind | output |
//! |------|--------|
//! | null, `None`, [`DbNull`](crate::DbNull) | `null` |
//! | bool | `true` / `false` |
//! | number | canonical decimal, unquoted |
//! | character, text | `"..."`, escaped |
//! | enum member | its ordinal, never its name |
//! | date | `new Date(N)`, N in epoch milliseconds |
//! | sequence | `[a,b,c]` |
//! | composite | `{"name":value,...}` |
//!
//! The ordinal of a unit enum variant is its declaration position (serde's
//! `variant_index`), starting at 0. Explicit discriminants are not consulted:
//! in `enum Code { A = 5, B = 9 }`, `Code::B` is written as `1`.
//!
//! Data-carrying enum variants are composites with one member named after the
//! variant: `{"Variant":payload}`.
//!
//! ## Nesting
//!
//! Each sequence, composite and data-carrying variant is one level of
//! nesting. `Option`, `Box`, `Rc` and newtype structs are transparent and do
//! not count. Past [`EncodeOptions::max_depth`] encoding fails with
//! [`Error::DepthLimitExceeded`]; the level count is unwound on every exit,
//! so a [`Serializer`] can be reused after a failed encode.
//!
//! ## Direct Serializer Usage
//!
//! The serializer appends to a caller-owned buffer:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsnotation::{EncodeOptions, Serializer};
//!
//! let mut out = String::from("var data = ");
//! let mut serializer = Serializer::with_options(&mut out, EncodeOptions::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//!
//! assert_eq!(out, "var data = [1,2,3]");
//! ```
//!
//! Nothing is rolled back on failure: if a member's `Serialize` impl fails,
//! the buffer keeps everything written up to that point.

use crate::escape::write_quoted;
use crate::member::{member_name, MemberNameSerializer};
use crate::{number, token, DateStyle, EncodeOptions, Error, Map, Result, Value};
use chrono::{TimeZone, Utc};
use log::{debug, trace};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// The notation serializer.
///
/// Writes into a borrowed `String`, so repeated encodes can share one buffer.
pub struct Serializer<'a> {
    output: &'a mut String,
    options: EncodeOptions,
    depth: usize,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer with default options appending to `output`.
    pub fn new(output: &'a mut String) -> Self {
        Self::with_options(output, EncodeOptions::default())
    }

    pub fn with_options(output: &'a mut String, options: EncodeOptions) -> Self {
        Serializer {
            output,
            options,
            depth: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Steps one level deeper, failing once the configured limit is passed.
    ///
    /// The level is given back when the [`Compound`] holding it is dropped.
    fn enter(&mut self) -> Result<()> {
        match self.options.max_depth {
            Some(limit) if self.depth >= limit => {
                debug!("depth limit {} exceeded while encoding", limit);
                Err(Error::DepthLimitExceeded { limit })
            }
            _ => {
                self.depth += 1;
                Ok(())
            }
        }
    }

    /// Opens a container and hands back the state that closes it.
    fn open<'s>(&'s mut self, open: &str, close: &'static str) -> Result<Compound<'s, 'a>> {
        self.enter()?;
        self.output.push_str(open);
        Ok(Compound {
            ser: self,
            first: true,
            suffix: close,
        })
    }

    /// Opens `{"variant":` followed by `open`.
    fn open_variant<'s>(
        &'s mut self,
        variant: &str,
        open: &str,
        close: &'static str,
    ) -> Result<Compound<'s, 'a>> {
        let name = member_name(variant)?;
        self.enter()?;
        self.output.push('{');
        write_quoted(self.output, name);
        self.output.push(':');
        self.output.push_str(open);
        Ok(Compound {
            ser: self,
            first: true,
            suffix: close,
        })
    }

    fn write_date<T>(&mut self, millis: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self.options.date_style {
            DateStyle::Constructor => {
                self.output.push_str("new Date(");
                millis.serialize(&mut *self)?;
                self.output.push(')');
                Ok(())
            }
            DateStyle::EpochMillis => millis.serialize(self),
        }
    }
}

impl<'s, 'a> ser::Serializer for &'s mut Serializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'s, 'a>;
    type SerializeTuple = Compound<'s, 'a>;
    type SerializeTupleStruct = Compound<'s, 'a>;
    type SerializeTupleVariant = Compound<'s, 'a>;
    type SerializeMap = Compound<'s, 'a>;
    type SerializeStruct = Compound<'s, 'a>;
    type SerializeStructVariant = Compound<'s, 'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        number::write_f64(self.output, v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        write_quoted(self.output, v.encode_utf8(&mut buf));
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        write_quoted(self.output, v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.output.push('[');
        for (i, byte) in v.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.output.push_str(&byte.to_string());
        }
        self.output.push(']');
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.output.push_str("null");
        Ok(())
    }

    // Covers the DbNull sentinel as well.
    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        self.output.push_str(&variant_index.to_string());
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match name {
            token::DATE => self.write_date(value),
            token::NUMBER => {
                let digits = value.serialize(MemberNameSerializer)?;
                if !number::is_number_text(&digits) {
                    return Err(Error::invalid_argument(&format!(
                        "`{}` is not a decimal number",
                        digits
                    )));
                }
                self.output.push_str(&digits);
                Ok(())
            }
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let mut compound = self.open_variant(variant, "", "}")?;
        value.serialize(&mut *compound.ser)?;
        compound.close()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.open("[", "]")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.open("[", "]")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.open("[", "]")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.open_variant(variant, "[", "]}")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.open("{", "}")
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.open("{", "}")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.open_variant(variant, "{", "}}")
    }
}

/// In-progress sequence or composite. Holds one level of nesting until dropped.
pub struct Compound<'s, 'a> {
    ser: &'s mut Serializer<'a>,
    first: bool,
    suffix: &'static str,
}

impl<'s, 'a> Compound<'s, 'a> {
    fn separate(&mut self) {
        if self.first {
            self.first = false;
        } else {
            self.ser.output.push(',');
        }
    }

    fn member(&mut self, name: &str) -> Result<()> {
        self.separate();
        write_quoted(self.ser.output, member_name(name)?);
        self.ser.output.push(':');
        Ok(())
    }

    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.separate();
        value.serialize(&mut *self.ser)
    }

    fn close(self) -> Result<()> {
        self.ser.output.push_str(self.suffix);
        Ok(())
    }
}

impl Drop for Compound<'_, '_> {
    fn drop(&mut self) {
        self.ser.depth -= 1;
    }
}

impl<'s, 'a> ser::SerializeSeq for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeTuple for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeTupleStruct for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeTupleVariant for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeMap for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.separate();
        let name = key.serialize(MemberNameSerializer)?;
        write_quoted(self.ser.output, &name);
        self.ser.output.push(':');
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeStruct for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.member(key)?;
        value.serialize(&mut *self.ser)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<()> {
        trace!("member `{}` suppressed", key);
        Ok(())
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'s, 'a> ser::SerializeStructVariant for Compound<'s, 'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.member(key)?;
        value.serialize(&mut *self.ser)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<()> {
        trace!("member `{}` suppressed", key);
        Ok(())
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

/// Serializer that captures a value as a [`Value`] tree.
///
/// Classification and member selection are the same as for [`Serializer`],
/// so encoding the captured tree gives the same text as encoding the
/// original. Nesting is counted the same way, against the `max_depth` of the
/// options it was built with.
#[derive(Clone, Copy, Debug)]
pub struct ValueSerializer {
    depth: usize,
    max_depth: Option<usize>,
}

impl Default for ValueSerializer {
    fn default() -> Self {
        Self::with_options(&EncodeOptions::default())
    }
}

impl ValueSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a capturing serializer with the nesting limit of `options`.
    pub fn with_options(options: &EncodeOptions) -> Self {
        ValueSerializer {
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Serializer for the next level down.
    fn nested(self) -> Result<ValueSerializer> {
        match self.max_depth {
            Some(limit) if self.depth >= limit => {
                debug!("depth limit {} exceeded while capturing", limit);
                Err(Error::DepthLimitExceeded { limit })
            }
            _ => Ok(ValueSerializer {
                depth: self.depth + 1,
                ..self
            }),
        }
    }
}

fn single_member(variant: &str, value: Value) -> Result<Value> {
    let mut object = Map::with_capacity(1);
    object.insert(member_name(variant)?.to_string(), value);
    Ok(Value::Object(object))
}

fn number_from_text(digits: &str) -> Result<Value> {
    if !number::is_number_text(digits) {
        return Err(Error::invalid_argument(&format!(
            "`{}` is not a decimal number",
            digits
        )));
    }
    match digits.parse::<BigInt>() {
        Ok(bi) => Ok(Value::BigInt(bi)),
        Err(_) => Ok(Value::Decimal(digits.to_string())),
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(i) => Value::from(i),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(i) => Value::from(i),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        if name == token::DB_NULL {
            Ok(Value::DbNull)
        } else {
            Ok(Value::Null)
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant_index))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        match name {
            token::DATE => {
                let millis = value
                    .serialize(self)?
                    .as_i64()
                    .ok_or_else(|| Error::invalid_argument("date must be epoch milliseconds"))?;
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .map(Value::Date)
                    .ok_or_else(|| Error::invalid_argument("date out of range"))
            }
            token::NUMBER => number_from_text(&value.serialize(MemberNameSerializer)?),
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        single_member(variant, value.serialize(self.nested()?)?)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            ser: self.nested()?,
            vec: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec {
            ser: self.nested()?,
            vec: Vec::with_capacity(len),
            variant: Some(variant),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            ser: self.nested()?,
            map: Map::with_capacity(len.unwrap_or(0)),
            next_key: None,
            variant: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap {
            ser: self.nested()?,
            map: Map::with_capacity(len),
            next_key: None,
            variant: Some(variant),
        })
    }
}

pub struct SerializeVec {
    ser: ValueSerializer,
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

impl SerializeVec {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(self.ser)?);
        Ok(())
    }

    fn finish(self) -> Result<Value> {
        let array = Value::Array(self.vec);
        match self.variant {
            Some(variant) => single_member(variant, array),
            None => Ok(array),
        }
    }
}

pub struct SerializeMap {
    ser: ValueSerializer,
    map: Map,
    next_key: Option<String>,
    variant: Option<&'static str>,
}

impl SerializeMap {
    fn finish(self) -> Result<Value> {
        let object = Value::Object(self.map);
        match self.variant {
            Some(variant) => single_member(variant, object),
            None => Ok(object),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key.serialize(MemberNameSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = value.serialize(self.ser)?;
        self.map.insert(key, value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = member_name(key)?.to_string();
        let value = value.serialize(self.ser)?;
        self.map.insert(name, value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = member_name(key)?.to_string();
        let value = value.serialize(self.ser)?;
        self.map.insert(name, value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}
