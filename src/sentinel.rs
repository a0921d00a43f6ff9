//! The database-null sentinel.
//!
//! [`DbNull`] stands for "no value in this column", a distinct thing from a
//! Rust `None`. It always encodes as `null`, but it classifies as
//! [`Kind::SentinelNull`](crate::Kind::SentinelNull) rather than
//! [`Kind::Null`](crate::Kind::Null) so callers inspecting a value can tell
//! the two apart.

use crate::token;
use serde::{Serialize, Serializer};

/// Marker for an absent database value.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::{classify, to_string, DbNull, Kind};
///
/// assert_eq!(to_string(&DbNull).unwrap(), "null");
/// assert_eq!(classify(&DbNull), Kind::SentinelNull);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DbNull;

impl Serialize for DbNull {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit_struct(token::DB_NULL)
    }
}
