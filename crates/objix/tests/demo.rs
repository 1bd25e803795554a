// Demo binary output tests
//
// The driver's stdout is part of the observable contract, so these run
// the compiled `greeter` binary and compare its output byte for byte.

use std::process::Command;

const EXPECTED_STDOUT: &str = "Greeter instance initialized.\n\
Created object of type: Greeter\n\
Hello from Greeter! Message: \"This is the first call.\" (Call count: 1)\n\
Hello from Greeter! Message: \"GObject is powerful.\" (Call count: 2)\n\
Object destroyed.\n";

#[test]
fn demo_prints_the_exact_transcript() {
    let output = Command::new(env!("CARGO_BIN_EXE_greeter"))
        .env_remove("OBJIX_LOG")
        .output()
        .expect("demo binary runs");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_STDOUT);
}

/// Logging goes to stderr, so turning it all the way up must leave the
/// stdout transcript untouched.
#[test]
fn demo_stdout_is_unaffected_by_logging() {
    let output = Command::new(env!("CARGO_BIN_EXE_greeter"))
        .env("OBJIX_LOG", "trace")
        .output()
        .expect("demo binary runs");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_STDOUT);
    assert!(!output.stderr.is_empty());
}
