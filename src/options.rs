//! Configuration options for encoding.
//!
//! - [`EncodeOptions`]: main configuration struct
//! - [`DateStyle`]: how temporal values are written
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use serde_jsnotation::{to_string_with_options, DateStyle, EncodeOptions, Timestamp};
//!
//! let ts = Timestamp(Utc.timestamp_opt(1, 0).unwrap());
//!
//! // Default: a script constructor call
//! let text = to_string_with_options(&ts, EncodeOptions::new()).unwrap();
//! assert_eq!(text, "new Date(1000)");
//!
//! // Strict JSON consumers get the bare number
//! let options = EncodeOptions::new().with_date_style(DateStyle::EpochMillis);
//! let text = to_string_with_options(&ts, options).unwrap();
//! assert_eq!(text, "1000");
//! ```

/// Default nesting limit.
///
/// Only sequences, composites and data-carrying variants count, so a linked
/// list of `Option<Box<Node>>` uses one level per node.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// How temporal values are written.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::DateStyle;
///
/// assert_eq!(DateStyle::default(), DateStyle::Constructor);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `new Date(N)`. Needs a script evaluator on the reading side.
    #[default]
    Constructor,
    /// Bare `N`, readable by JSON parsers.
    EpochMillis,
}

/// Configuration options for encoding.
///
/// # Examples
///
/// ```rust
/// use serde_jsnotation::{DateStyle, EncodeOptions};
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.max_depth, Some(1024));
///
/// let options = EncodeOptions::json_compatible().without_depth_limit();
/// assert_eq!(options.date_style, DateStyle::EpochMillis);
/// assert_eq!(options.max_depth, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub date_style: DateStyle,
    /// Deepest nesting allowed before encoding fails with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    /// `None` removes the guard, leaving cyclic graphs to overflow the stack.
    pub max_depth: Option<usize>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            date_style: DateStyle::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl EncodeOptions {
    /// Creates default options (`new Date(N)` dates, depth limit of
    /// [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that leave out the `new Date(N)` production.
    ///
    /// The output is JSON as long as no text contains `'`, NUL or a vertical
    /// tab and no float is non-finite; those still use script-only forms.
    #[must_use]
    pub fn json_compatible() -> Self {
        EncodeOptions {
            date_style: DateStyle::EpochMillis,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting limit.
    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
