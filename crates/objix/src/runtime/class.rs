//! Type descriptors and method tables for the `objix` runtime.
//!
//! A class descriptor carries everything the runtime knows about a type:
//! its name, the instance field layout, an optional instance initializer
//! hook, and the method table mapping selector hashes to implementation
//! slots.
//!
//! # Architecture
//!
//! Descriptors are immutable once the registry builds them. [`Class`] is a
//! cheap handle (shared pointer) to a descriptor; instances, the registry,
//! and callers all clone the same handle. Two handles are equal exactly
//! when they point at the same descriptor, which the registry guarantees
//! means the same type name.

use crate::error::Result;
use crate::runtime::message::Args;
use crate::runtime::object::Object;
use crate::runtime::selector::Selector;
use fxhash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier for a registered type.
///
/// Handed out by the registry; stable for as long as the registry lives.
/// Repeated registration of the same name yields the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Returns the raw index value.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Method implementation slot type.
///
/// Every entry in a method table is a function pointer of this shape:
/// receiver first, then the argument payload. Implementations report
/// failures through the returned `Result`; a method with nothing to
/// report returns `Ok(())`.
pub type Imp = fn(&Object, &Args) -> Result<()>;

/// Instance initializer hook, run once per instance immediately after
/// allocation (fields are already zeroed when it runs).
pub type InitFn = fn(&Object);

/// A method table entry: selector, implementation slot, declared arity.
///
/// Dispatch validates the supplied argument count against `arity` before
/// invoking `imp`.
#[derive(Clone)]
pub struct Method {
    /// Method selector.
    pub selector: Selector,
    /// Function pointer to the implementation.
    pub imp: Imp,
    /// Number of arguments the implementation expects (receiver excluded).
    pub arity: usize,
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("selector", &self.selector)
            .field("imp", &format!("{:p}", self.imp as *const ()))
            .field("arity", &self.arity)
            .finish()
    }
}

/// Everything the registry needs to build a class descriptor.
pub struct ClassSpec {
    /// Type name (must be unique per registry; reuse returns the existing
    /// descriptor).
    pub name: String,
    /// Number of zero-initialized integer field slots per instance.
    pub slots: usize,
    /// Optional instance initializer, run once per [`Object::new`].
    pub init: Option<InitFn>,
    /// Methods to bind into the table. Later entries win on selector
    /// collision.
    pub methods: Vec<Method>,
}

/// Internal descriptor data, shared behind `Arc` by every handle.
pub(crate) struct ClassInner {
    name: String,
    id: TypeId,
    slots: usize,
    init: Option<InitFn>,
    /// Method table: selector hash -> Method. Populated once at
    /// registration, immutable afterwards.
    methods: FxHashMap<u64, Method>,
}

/// Handle to a registered class descriptor.
///
/// Cloning is cheap (shared pointer). The descriptor itself never changes
/// after registration and lives as long as any handle to it.
///
/// # Example
///
/// ```rust
/// use objix::{greeter, Registry};
///
/// let registry = Registry::new();
/// let class = greeter::register(&registry);
///
/// assert_eq!(class.name(), "Greeter");
/// assert_eq!(class.slots(), 1);
/// ```
#[derive(Clone)]
pub struct Class {
    pub(crate) inner: Arc<ClassInner>,
}

impl Class {
    /// Builds a descriptor from a spec. Only the registry calls this; use
    /// [`Registry::get_or_register`](crate::runtime::Registry::get_or_register)
    /// to obtain a `Class`.
    pub(crate) fn from_spec(id: TypeId, spec: ClassSpec) -> Self {
        let mut methods =
            FxHashMap::with_capacity_and_hasher(spec.methods.len(), Default::default());
        for method in spec.methods {
            methods.insert(method.selector.hash(), method);
        }

        Class {
            inner: Arc::new(ClassInner {
                name: spec.name,
                id,
                slots: spec.slots,
                init: spec.init,
                methods,
            }),
        }
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the registry identifier for this type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.inner.id
    }

    /// Returns the number of field slots in the instance layout.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.inner.slots
    }

    /// Returns the instance initializer hook, if one was registered.
    pub(crate) fn init(&self) -> Option<InitFn> {
        self.inner.init
    }

    /// Looks up a method table entry by selector.
    ///
    /// # Returns
    ///
    /// - `Some(&Method)` if a slot is bound for the selector
    /// - `None` otherwise
    #[must_use]
    pub fn lookup_method(&self, selector: &Selector) -> Option<&Method> {
        self.inner.methods.get(&selector.hash())
    }

    /// Looks up just the implementation pointer for a selector.
    ///
    /// This is the slot a caller invokes through to get virtual dispatch:
    /// the same call site reaches whatever implementation registration
    /// bound for the receiver's type.
    #[must_use]
    pub fn lookup_imp(&self, selector: &Selector) -> Option<Imp> {
        self.lookup_method(selector).map(|m| m.imp)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality: same descriptor = same type (registry guarantee)
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name())
            .field("id", &self.type_id())
            .field("slots", &self.slots())
            .finish()
    }
}
