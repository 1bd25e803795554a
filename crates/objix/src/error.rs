//! Error types for the `objix` runtime.
//!
//! One flat enum covers every fallible operation in the runtime: selector
//! validation, dispatch resolution, and instance field access.

use std::fmt;

/// Errors that can occur in the `objix` runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Selector name failed validation (empty, or contains whitespace or
    /// control characters).
    InvalidSelector {
        /// The rejected name.
        name: String,
    },

    /// No method slot is bound for the selector in the receiver's class.
    SelectorNotFound {
        /// The selector name that was looked up.
        selector: String,
    },

    /// Argument count does not match the method's declared arity.
    ArityMismatch {
        /// The selector being dispatched.
        selector: String,
        /// Arity declared at registration.
        expected: usize,
        /// Arguments actually supplied.
        got: usize,
    },

    /// Instance field index outside the layout declared at registration.
    SlotOutOfRange {
        /// The requested slot index.
        index: usize,
        /// Number of slots in the instance layout.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelector { name } => {
                write!(f, "Invalid selector name: {name:?}")
            }
            Error::SelectorNotFound { selector } => {
                write!(f, "Selector not found: {selector}")
            }
            Error::ArityMismatch {
                selector,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Arity mismatch for {selector}: expected {expected} arguments, got {got}"
                )
            }
            Error::SlotOutOfRange { index, len } => {
                write!(f, "Slot index {index} out of range for layout of {len} slots")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for objix runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
