// Lifecycle integration tests
//
// These exercise the runtime end to end the way the demo driver does:
// registration, creation, dispatch through the method table, release.

use objix::runtime::dispatch;
use objix::{greeter, Args, ClassSpec, Object, Registry, Selector};
use std::str::FromStr;

/// Repeated registration yields the same identifier and builds the
/// descriptor exactly once.
#[test]
fn registration_is_idempotent() {
    let registry = Registry::new();

    let ids: Vec<_> = (0..5)
        .map(|_| greeter::register(&registry).type_id())
        .collect();

    assert!(ids.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(registry.len(), 1);
}

/// After k greets, the counter reads k, regardless of message content.
#[test]
fn counter_is_monotonic() {
    let registry = Registry::new();
    let obj = greeter::create(&registry);
    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();

    assert_eq!(obj.get(greeter::SLOT_CALL_COUNT).unwrap(), 0);

    let messages = ["first", "", "a much longer message with spaces", "\u{1F44B}"];
    for (k, message) in messages.iter().enumerate() {
        dispatch::send(&obj, &greet, &Args::text(message)).unwrap();
        assert_eq!(
            obj.get(greeter::SLOT_CALL_COUNT).unwrap(),
            (k + 1) as i64
        );
    }
}

/// Instances of the same type keep independent counters.
#[test]
fn instances_are_independent() {
    let registry = Registry::new();
    let first = greeter::create(&registry);
    let second = greeter::create(&registry);
    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();

    for _ in 0..3 {
        dispatch::send(&first, &greet, &Args::text("only the first")).unwrap();
    }

    assert_eq!(first.get(greeter::SLOT_CALL_COUNT).unwrap(), 3);
    assert_eq!(second.get(greeter::SLOT_CALL_COUNT).unwrap(), 0);
}

/// Release consumes the handle; shared handles keep the instance
/// alive until the last one goes.
#[test]
fn release_ends_the_lifecycle() {
    let registry = Registry::new();
    let obj = greeter::create(&registry);
    assert_eq!(obj.refcount(), 1);

    let shared = obj.clone();
    assert_eq!(obj.refcount(), 2);

    obj.release();
    assert_eq!(shared.refcount(), 1);

    // The surviving handle is still fully usable.
    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();
    dispatch::send(&shared, &greet, &Args::text("still here")).unwrap();
    assert_eq!(shared.get(greeter::SLOT_CALL_COUNT).unwrap(), 1);

    shared.release();
}

/// The literal reference scenario, step for step: register, create, read
/// the type name from the live instance, dispatch greet twice through the
/// method table, release. The stdout transcript itself is asserted by the
/// binary tests in `demo.rs`.
#[test]
fn end_to_end_scenario() {
    let registry = Registry::new();
    let class = greeter::register(&registry);

    let obj = Object::new(&class);
    assert_eq!(obj.type_name(), "Greeter");
    assert_eq!(obj.refcount(), 1);

    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();
    let klass = obj.class();
    let imp = klass.lookup_imp(&greet).expect("greet slot is bound");

    imp(&obj, &Args::text("This is the first call.")).unwrap();
    imp(&obj, &Args::text("GObject is powerful.")).unwrap();

    assert_eq!(obj.get(greeter::SLOT_CALL_COUNT).unwrap(), 2);
    obj.release();
}

/// Dispatch rejects selectors the class never bound.
#[test]
fn unknown_selector_is_an_error() {
    let registry = Registry::new();
    let obj = greeter::create(&registry);
    let missing = Selector::from_str("vanish").unwrap();

    let result = dispatch::send(&obj, &missing, &Args::None);
    assert!(matches!(
        result,
        Err(objix::Error::SelectorNotFound { .. })
    ));
}

/// Dispatch rejects calls whose argument count disagrees with the
/// registered arity.
#[test]
fn wrong_arity_is_an_error() {
    let registry = Registry::new();
    let obj = greeter::create(&registry);
    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();

    let result = dispatch::send(&obj, &greet, &Args::None);
    assert!(matches!(result, Err(objix::Error::ArityMismatch { .. })));
}

/// Separate registries are fully isolated: same name, distinct
/// descriptors.
#[test]
fn registries_do_not_share_state() {
    let registry_a = Registry::new();
    let registry_b = Registry::new();

    let class_a = greeter::register(&registry_a);
    let class_b = greeter::register(&registry_b);

    assert_eq!(class_a.name(), class_b.name());
    assert_ne!(class_a, class_b);
    assert_eq!(registry_a.len(), 1);
    assert_eq!(registry_b.len(), 1);
}

/// A registry can hold the Greeter next to other types without
/// interference.
#[test]
fn greeter_coexists_with_other_types() {
    let registry = Registry::new();

    let other = registry.get_or_register(ClassSpec {
        name: "Bystander".to_string(),
        slots: 0,
        init: None,
        methods: Vec::new(),
    });
    let greeter_class = greeter::register(&registry);

    assert_ne!(other, greeter_class);
    assert_ne!(other.type_id(), greeter_class.type_id());
    assert_eq!(registry.len(), 2);

    // The bystander class has no greet slot.
    let greet = Selector::from_str(greeter::SEL_GREET).unwrap();
    assert!(other.lookup_imp(&greet).is_none());
    assert!(greeter_class.lookup_imp(&greet).is_some());
}
