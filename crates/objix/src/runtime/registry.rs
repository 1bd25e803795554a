//! Explicit type registry for the `objix` runtime.
//!
//! The registry is an ordinary value constructed by the program and passed
//! by reference to whatever needs to resolve types. There is no hidden
//! process-global: descriptors live exactly as long as the registry (plus
//! any outstanding [`Class`] handles).
//!
//! Registration is idempotent. The first `get_or_register` for a name
//! builds and stores the descriptor; every later call for that name
//! returns the existing descriptor without rebuilding, so descriptor
//! construction happens exactly once per type name.

use crate::runtime::class::{Class, ClassSpec, TypeId};
use fxhash::FxHashMap;
use std::sync::RwLock;

struct RegistryInner {
    /// Descriptors indexed by `TypeId`.
    types: Vec<Class>,
    /// Map of type name -> TypeId.
    by_name: FxHashMap<String, TypeId>,
}

/// Registry of class descriptors.
///
/// # Thread Safety
///
/// Access goes through an `RwLock`: lookups take the read lock,
/// registration takes the write lock with a re-check, so concurrent
/// registration of the same name still builds the descriptor only once.
///
/// # Example
///
/// ```rust
/// use objix::{ClassSpec, Registry};
///
/// let registry = Registry::new();
/// let class = registry.get_or_register(ClassSpec {
///     name: "Point".to_string(),
///     slots: 2,
///     init: None,
///     methods: Vec::new(),
/// });
///
/// assert_eq!(registry.lookup("Point"), Some(class));
/// ```
pub struct Registry {
    inner: RwLock<RegistryInner>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Registry {
            inner: RwLock::new(RegistryInner {
                types: Vec::new(),
                by_name: FxHashMap::default(),
            }),
        }
    }

    /// Returns the descriptor for `spec.name`, registering it first if
    /// this is the name's first appearance.
    ///
    /// Idempotent: repeated calls for the same name return the same
    /// descriptor (and therefore the same [`TypeId`]); the `ClassSpec`
    /// of a repeat call is discarded. Registration cannot fail.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned (a thread panicked while
    /// registering).
    pub fn get_or_register(&self, spec: ClassSpec) -> Class {
        // Fast path: name already registered.
        {
            let inner = self.inner.read().unwrap();
            if let Some(&id) = inner.by_name.get(spec.name.as_str()) {
                return inner.types[id.0 as usize].clone();
            }
        } // Release read lock

        let mut inner = self.inner.write().unwrap();

        // Re-check: another thread may have registered while we waited.
        if let Some(&id) = inner.by_name.get(spec.name.as_str()) {
            return inner.types[id.0 as usize].clone();
        }

        let id = TypeId(
            u32::try_from(inner.types.len()).expect("registry type count fits in u32"),
        );
        let class = Class::from_spec(id, spec);
        inner.by_name.insert(class.name().to_string(), id);
        inner.types.push(class.clone());

        objix_log::debug!("registered type {:?} as id {}", class.name(), id.as_u32());

        class
    }

    /// Looks up a descriptor by type name.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Class> {
        let inner = self.inner.read().unwrap();
        inner
            .by_name
            .get(name)
            .map(|&id| inner.types[id.0 as usize].clone())
    }

    /// Looks up a descriptor by identifier.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    #[must_use]
    pub fn class(&self, id: TypeId) -> Option<Class> {
        let inner = self.inner.read().unwrap();
        inner.types.get(id.0 as usize).cloned()
    }

    /// Returns the number of registered types.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().types.len()
    }

    /// Returns true if no types have been registered.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_spec(name: &str) -> ClassSpec {
        ClassSpec {
            name: name.to_string(),
            slots: 0,
            init: None,
            methods: Vec::new(),
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let registry = Registry::new();

        let first = registry.get_or_register(empty_spec("Repeat"));
        let second = registry.get_or_register(empty_spec("Repeat"));
        let third = registry.get_or_register(empty_spec("Repeat"));

        assert_eq!(first.type_id(), second.type_id());
        assert_eq!(second.type_id(), third.type_id());
        assert_eq!(first, third);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names_distinct_ids() {
        let registry = Registry::new();

        let a = registry.get_or_register(empty_spec("TypeA"));
        let b = registry.get_or_register(empty_spec("TypeB"));

        assert_ne!(a.type_id(), b.type_id());
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = Registry::new();
        let class = registry.get_or_register(empty_spec("Named"));

        assert_eq!(registry.lookup("Named"), Some(class));
        assert_eq!(registry.lookup("Missing"), None);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = Registry::new();
        let class = registry.get_or_register(empty_spec("ById"));

        assert_eq!(registry.class(class.type_id()), Some(class));
        assert_eq!(registry.class(TypeId(99)), None);
    }

    #[test]
    fn test_repeat_spec_is_discarded() {
        let registry = Registry::new();

        let first = registry.get_or_register(ClassSpec {
            slots: 1,
            ..empty_spec("SpecOnce")
        });
        // Second registration with a different layout: ignored.
        let second = registry.get_or_register(ClassSpec {
            slots: 5,
            ..empty_spec("SpecOnce")
        });

        assert_eq!(first, second);
        assert_eq!(second.slots(), 1);
    }

    #[test]
    fn test_concurrent_registration_builds_once() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(Registry::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.get_or_register(empty_spec("Raced")).type_id()
                })
            })
            .collect();

        let ids: Vec<_> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(registry.len(), 1);
    }
}
