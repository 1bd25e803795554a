//! Argument payloads for dynamic dispatch.
//!
//! [`Args`] carries what a caller passes alongside the receiver when
//! invoking a method slot. The runtime's methods take either nothing or a
//! single borrowed text argument, so the enum stays small; dispatch
//! validates the count against the method's declared arity.
//!
//! # Example
//!
//! ```rust
//! use objix::Args;
//!
//! let none = Args::None;
//! assert_eq!(none.count(), 0);
//!
//! let text = Args::text("hello");
//! assert_eq!(text.count(), 1);
//! assert_eq!(text.as_text(), Some("hello"));
//! ```

/// Arguments for a dispatch call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Args<'a> {
    /// No arguments (besides the receiver).
    None,
    /// One borrowed text argument. Any text is legal, including empty.
    Text(&'a str),
}

impl<'a> Args<'a> {
    /// Creates a single-text-argument payload.
    #[must_use]
    pub fn text(text: &'a str) -> Self {
        Args::Text(text)
    }

    /// Returns the number of arguments carried.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Args::None => 0,
            Args::Text(_) => 1,
        }
    }

    /// Returns the text argument, if one is carried.
    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Args::None => None,
            Args::Text(text) => Some(text),
        }
    }
}
