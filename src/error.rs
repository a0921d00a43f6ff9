//! Error types for notation encoding.
//!
//! Encoding is a pure computation, so there are only a few ways it can fail:
//!
//! - **Usage errors**: an argument the encoder cannot work with, such as a
//!   member renamed to an empty string
//! - **Key errors**: a map key that cannot be written as a member name
//! - **Depth errors**: the recursion guard tripped, usually because the value
//!   graph is cyclic
//! - **Propagated errors**: whatever a `Serialize` implementation reported
//!   while its members were being read
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsnotation::{to_string_with_options, EncodeOptions, Error};
//!
//! let nested = vec![vec![vec![1]]];
//! let options = EncodeOptions::new().with_max_depth(2);
//!
//! let err = to_string_with_options(&nested, options).unwrap_err();
//! assert!(matches!(err, Error::DepthLimitExceeded { limit: 2 }));
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while writing encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// An argument the encoder cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A map key whose kind has no text form
    #[error("Map key must be text, found {0}")]
    KeyMustBeText(Kind),

    /// Nesting went deeper than the configured limit
    #[error("Recursion depth limit of {limit} exceeded (is the value graph cyclic?)")]
    DepthLimitExceeded { limit: usize },

    /// Error raised by a `Serialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a usage error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsnotation::Error;
    ///
    /// let err = Error::invalid_argument("member name must be non-empty");
    /// assert!(err.to_string().contains("non-empty"));
    /// ```
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// Messages pass through unchanged, so a failure raised by a member
    /// accessor reads the same after it surfaces from the encoder.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
