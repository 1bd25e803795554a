//! Message dispatch for the `objix` runtime.
//!
//! [`send`] is the indirect call path: the selector is resolved through
//! the receiver's class method table, the argument count is validated
//! against the declared arity, and only then is the slot invoked. The
//! same call site therefore reaches whatever implementation registration
//! bound for the receiver's type.
//!
//! # Dispatch algorithm
//!
//! 1. Read the receiver's class
//! 2. Look up the selector in the class method table
//! 3. Validate argument count against the method's arity
//! 4. Invoke the implementation slot
//!
//! Callers may also resolve the slot themselves with
//! [`Class::lookup_imp`](crate::runtime::Class::lookup_imp) and invoke
//! it directly; `send` is the same resolution with the arity check
//! folded in.

use crate::error::{Error, Result};
use crate::runtime::message::Args;
use crate::runtime::object::Object;
use crate::runtime::selector::Selector;

/// Sends a message to an object.
///
/// # Errors
///
/// - [`Error::SelectorNotFound`] if the receiver's class binds no slot
///   for the selector
/// - [`Error::ArityMismatch`] if the argument count does not match the
///   method's declared arity
/// - Whatever the implementation itself returns
pub fn send(obj: &Object, selector: &Selector, args: &Args) -> Result<()> {
    let class = obj.class();

    let method =
        class
            .lookup_method(selector)
            .ok_or_else(|| Error::SelectorNotFound {
                selector: selector.name().to_string(),
            })?;

    if args.count() != method.arity {
        return Err(Error::ArityMismatch {
            selector: selector.name().to_string(),
            expected: method.arity,
            got: args.count(),
        });
    }

    objix_log::trace!("dispatch {} -> {}", class.name(), selector.name());

    (method.imp)(obj, args)
}
