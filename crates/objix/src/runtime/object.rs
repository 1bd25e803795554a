//! Object allocation and lifecycle management for the `objix` runtime.
//!
//! Instances are heap-allocated with manual reference counting:
//! - Each object has an atomic reference count starting at 1
//! - The allocation is freed exactly when the count reaches 0
//! - `Clone` is shallow (pointer duplication with a count increment)
//! - `Drop` decrements; the last handle out frees the instance
//!
//! # Field slots
//!
//! The class descriptor declares how many integer field slots an instance
//! carries. Slots are zero-initialized at allocation and accessed by
//! index; the registered instance initializer hook runs after allocation
//! with the slots already zeroed.
//!
//! # Thread Safety
//!
//! Reference counting and slot access are atomic, so handles may be
//! cloned and used across threads. No stronger coordination between slot
//! writers is provided or claimed.

use crate::error::{Error, Result};
use crate::runtime::class::Class;
use std::fmt;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

/// Raw instance data allocated on the heap.
///
/// Not shared storage like class descriptors: each instance has an
/// individual lifetime controlled by its reference count.
pub(crate) struct RawObject {
    /// The class this object is an instance of. Holding the handle keeps
    /// the descriptor alive for at least as long as the instance.
    class: Class,
    /// Reference count (starts at 1, freed when it reaches 0).
    refcount: AtomicU32,
    /// Zero-initialized integer field slots, sized by the class layout.
    slots: Box<[AtomicI64]>,
}

/// A reference-counted runtime instance.
///
/// # Lifecycle
///
/// [`Object::new`] allocates with refcount 1 and runs the class's
/// instance initializer. Cloning a handle retains; dropping a handle
/// releases; the backing allocation is freed exactly once, when the last
/// handle goes away. [`Object::release`] consumes the handle, making the
/// explicit end of an instance's life visible in the caller's code and
/// impossible to use afterwards.
///
/// # Example
///
/// ```rust
/// use objix::{ClassSpec, Object, Registry};
///
/// let registry = Registry::new();
/// let class = registry.get_or_register(ClassSpec {
///     name: "Counter".to_string(),
///     slots: 1,
///     init: None,
///     methods: Vec::new(),
/// });
///
/// let obj = Object::new(&class);
/// assert_eq!(obj.refcount(), 1);
/// assert_eq!(obj.get(0).unwrap(), 0);
///
/// obj.bump(0).unwrap();
/// assert_eq!(obj.get(0).unwrap(), 1);
///
/// obj.release();
/// ```
pub struct Object {
    /// Pointer to instance data on the heap.
    /// Never null, valid while refcount > 0.
    ptr: NonNull<RawObject>,
}

impl Object {
    /// Allocates a new instance of the given class.
    ///
    /// The instance starts with refcount 1 and every field slot zeroed,
    /// then the class's instance initializer hook (if any) runs. Cannot
    /// fail: no fallible resource acquisition is involved.
    #[must_use]
    pub fn new(class: &Class) -> Self {
        let slots: Box<[AtomicI64]> =
            (0..class.slots()).map(|_| AtomicI64::new(0)).collect();

        let raw = RawObject {
            class: class.clone(),
            refcount: AtomicU32::new(1),
            slots,
        };

        // Heap allocation (ownership transferred to the handle).
        let ptr = Box::into_raw(Box::new(raw));

        // SAFETY: ptr is not null (Box::new always succeeds)
        let obj = Object {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
        };

        objix_log::debug!("allocated {} instance", class.name());

        if let Some(init) = class.init() {
            init(&obj);
        }

        obj
    }

    fn raw(&self) -> &RawObject {
        // SAFETY: self.ptr points to a valid RawObject while any handle
        // exists (refcount > 0).
        unsafe { &*self.ptr.as_ptr() }
    }

    /// Returns the object's class.
    #[must_use]
    pub fn class(&self) -> Class {
        self.raw().class.clone()
    }

    /// Returns the runtime type name, read through the live instance.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.raw().class.name()
    }

    /// Reads a field slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOutOfRange`] if `slot` is outside the layout
    /// declared at registration.
    pub fn get(&self, slot: usize) -> Result<i64> {
        let slots = &self.raw().slots;
        slots
            .get(slot)
            .map(|s| s.load(Ordering::Acquire))
            .ok_or(Error::SlotOutOfRange {
                index: slot,
                len: slots.len(),
            })
    }

    /// Writes a field slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOutOfRange`] if `slot` is outside the layout.
    pub fn set(&self, slot: usize, value: i64) -> Result<()> {
        let slots = &self.raw().slots;
        slots
            .get(slot)
            .map(|s| s.store(value, Ordering::Release))
            .ok_or(Error::SlotOutOfRange {
                index: slot,
                len: slots.len(),
            })
    }

    /// Increments a field slot by one and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOutOfRange`] if `slot` is outside the layout.
    pub fn bump(&self, slot: usize) -> Result<i64> {
        let slots = &self.raw().slots;
        slots
            .get(slot)
            .map(|s| s.fetch_add(1, Ordering::AcqRel) + 1)
            .ok_or(Error::SlotOutOfRange {
                index: slot,
                len: slots.len(),
            })
    }

    /// Returns the current reference count.
    ///
    /// Primarily useful for tests; under concurrent cloning the value can
    /// change as soon as it is read.
    #[must_use]
    pub fn refcount(&self) -> u32 {
        // Acquire: observe all previous releases.
        self.raw().refcount.load(Ordering::Acquire)
    }

    /// Releases this handle, ending its share of the instance's life.
    ///
    /// Consuming `self` is the point: after `release` no handle remains,
    /// so use-after-release does not compile. The decrement itself lives
    /// in `Drop`, which also covers handles that simply go out of scope.
    pub fn release(self) {
        // Drop does the decrement.
    }
}

// SAFETY: Object is Send because:
// - RawObject is heap-allocated and reached only through this handle
// - the refcount is atomic, so handles on different threads cannot race
//   the free
// - Class is a shared handle to an immutable descriptor
unsafe impl Send for Object {}

// SAFETY: Object is Sync because all access through &self is atomic
// (refcount, slots) or immutable (class).
unsafe impl Sync for Object {}

impl Clone for Object {
    fn clone(&self) -> Self {
        // Retain. Check-then-increment: a saturated count must never be
        // incremented, or the wrap to 0 would let concurrent drops free
        // the instance while handles still exist.
        let refcount = &self.raw().refcount;
        let mut current = refcount.load(Ordering::Relaxed);
        loop {
            assert_ne!(
                current,
                u32::MAX,
                "Reference count overflow in Object::clone"
            );
            match refcount.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }

        Object { ptr: self.ptr }
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        let old = {
            let raw = self.raw();
            raw.refcount.fetch_sub(1, Ordering::AcqRel)
        };

        if old == 1 {
            objix_log::debug!("freeing {} instance", self.raw().class.name());

            // Refcount reached 0: reclaim ownership and free.
            // SAFETY: ptr was created with Box::into_raw, and no other
            // handle exists (we held the last count).
            unsafe {
                drop(Box::from_raw(self.ptr.as_ptr()));
            }
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality: same heap allocation.
        std::ptr::eq(self.ptr.as_ptr(), other.ptr.as_ptr())
    }
}

impl Eq for Object {}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.type_name())
            .field("refcount", &self.refcount())
            .finish()
    }
}
