#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;

/// Create a `srch` command pointed at the freshly built binary.
#[allow(dead_code)]
pub fn srch_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("srch"))
}
