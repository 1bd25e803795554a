//! Selector validation and hashing for the `objix` runtime.
//!
//! A [`Selector`] is a validated method name with a precomputed 64-bit
//! hash. Method tables are keyed by that hash, so lookup never rehashes
//! the name.
//!
//! Selectors are plain owned values. The runtime keeps no process-wide
//! selector table; two selectors built from the same name compare equal
//! and hash identically, which is all the method tables need.

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A unique method name in the runtime.
///
/// # Example
///
/// ```rust
/// use objix::Selector;
/// use std::str::FromStr;
///
/// let sel1 = Selector::from_str("greet").unwrap();
/// let sel2 = Selector::from_str("greet").unwrap();
///
/// assert_eq!(sel1, sel2);
/// assert_eq!(sel1.name(), "greet");
/// ```
#[derive(Clone)]
pub struct Selector {
    name: Box<str>,
    /// Precomputed once at construction; method tables key on this.
    hash: u64,
}

impl FromStr for Selector {
    type Err = Error;

    /// Builds a selector, validating the name.
    ///
    /// Names must be non-empty and contain no whitespace or control
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if the name fails validation.
    fn from_str(name: &str) -> Result<Self> {
        if name.is_empty()
            || name.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(Error::InvalidSelector {
                name: name.to_string(),
            });
        }

        Ok(Selector {
            name: name.into(),
            hash: fxhash::hash64(name),
        })
    }
}

impl Selector {
    /// Returns the selector name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the precomputed hash.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        // Hash first: cheap reject for the common unequal case.
        self.hash == other.hash && self.name == other.name
    }
}

impl Eq for Selector {}

impl Hash for Selector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.name)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector() {
        let sel = Selector::from_str("greet").unwrap();
        assert_eq!(sel.name(), "greet");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Selector::from_str("");
        assert!(matches!(result, Err(Error::InvalidSelector { .. })));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(Selector::from_str("say hello").is_err());
        assert!(Selector::from_str("greet\n").is_err());
        assert!(Selector::from_str("\tgreet").is_err());
    }

    #[test]
    fn test_same_name_same_hash() {
        let sel1 = Selector::from_str("greet").unwrap();
        let sel2 = Selector::from_str("greet").unwrap();

        assert_eq!(sel1, sel2);
        assert_eq!(sel1.hash(), sel2.hash());
    }

    #[test]
    fn test_different_names_differ() {
        let sel1 = Selector::from_str("greet").unwrap();
        let sel2 = Selector::from_str("destroy").unwrap();

        assert_ne!(sel1, sel2);
        assert_ne!(sel1.hash(), sel2.hash());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let sel = Selector::from_str("greet").unwrap();
        let cloned = sel.clone();

        assert_eq!(sel, cloned);
        assert_eq!(sel.hash(), cloned.hash());
    }

    #[test]
    fn test_debug_and_display() {
        let sel = Selector::from_str("greet").unwrap();
        assert_eq!(format!("{sel:?}"), "Selector(greet)");
        assert_eq!(format!("{sel}"), "greet");
    }
}
