//! Demo driver: define a type, dispatch its method twice, release.
//!
//! Reproduces the reference scenario on stdout:
//!
//! ```text
//! Greeter instance initialized.
//! Created object of type: Greeter
//! Hello from Greeter! Message: "This is the first call." (Call count: 1)
//! Hello from Greeter! Message: "GObject is powerful." (Call count: 2)
//! Object destroyed.
//! ```
//!
//! Diagnostics go to stderr via `objix-log`; set `OBJIX_LOG=debug` to see
//! the runtime's registration and lifecycle logging.

use objix::error::{Error, Result};
use objix::runtime::message::Args;
use objix::runtime::registry::Registry;
use objix::runtime::selector::Selector;
use objix::{greeter, Object};
use std::str::FromStr;

fn main() -> Result<()> {
    objix_log::init_from_env("OBJIX_LOG");

    let registry = Registry::new();
    let class = greeter::register(&registry);

    let obj = Object::new(&class);
    println!("Created object of type: {}", obj.type_name());

    // Resolve the greet slot through the live instance's class and call
    // through it, rather than calling any function by name.
    let greet = Selector::from_str(greeter::SEL_GREET)?;
    let klass = obj.class();
    let imp = klass
        .lookup_imp(&greet)
        .ok_or_else(|| Error::SelectorNotFound {
            selector: greet.name().to_string(),
        })?;

    imp(&obj, &Args::text("This is the first call."))?;
    imp(&obj, &Args::text("GObject is powerful."))?;

    obj.release();
    println!("Object destroyed.");

    Ok(())
}
