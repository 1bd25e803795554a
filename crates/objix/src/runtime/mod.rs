//! `objix` runtime module.
//!
//! Core runtime infrastructure:
//!
//! - [`selector`]: validated, prehashed method names
//! - [`class`]: type descriptors with method tables
//! - [`registry`]: explicit type registry, idempotent registration
//! - [`object`]: reference-counted instances
//! - [`message`]: argument payloads for dispatch
//! - [`dispatch`]: slot resolution and invocation
//!
//! # Ownership model
//!
//! There is no hidden global state. A [`Registry`] is constructed by the
//! program and passed by reference to whatever needs to resolve types;
//! descriptors live as long as the registry (and any instance holding a
//! handle to them). Instances are individually reference-counted and freed
//! exactly when their count reaches zero.

pub mod class;
pub mod dispatch;
pub mod message;
pub mod object;
pub mod registry;
pub mod selector;

pub use class::{Class, ClassSpec, Imp, Method, TypeId};
pub use message::Args;
pub use object::Object;
pub use registry::Registry;
pub use selector::Selector;
