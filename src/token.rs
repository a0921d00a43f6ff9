//! Reserved serde names used to smuggle notation-specific kinds through the
//! serde data model.
//!
//! Other serializers see plain newtype and unit structs, so a value carrying
//! one of these names still serializes sensibly elsewhere (a date becomes its
//! epoch-millisecond integer, the sentinel becomes `null`).

/// Newtype struct wrapping an `i64` of epoch milliseconds.
pub(crate) const DATE: &str = "$serde_jsnotation::private::Date";

/// Unit struct marking the database-null sentinel.
pub(crate) const DB_NULL: &str = "$serde_jsnotation::private::DbNull";

/// Newtype struct wrapping the decimal digits of an arbitrary-precision number.
pub(crate) const NUMBER: &str = "$serde_jsnotation::private::Number";
