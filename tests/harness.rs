//! Test harness for jls integration tests

use std::path::Path;
use std::process::Command;

pub use jls::test_utils::{SAMPLE_TREE, TestTree};

/// Run the jls binary in `dir` with times rendered in UTC.
pub fn run_jls(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_jls");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("TZ", "UTC")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run jls");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_writes_sample() {
        let tree = TestTree::with_sample();
        assert!(tree.path().join("tree.json").exists());
    }

    #[test]
    fn test_harness_add_document() {
        let tree = TestTree::new();
        let path = tree.add_document("other.json", "{}");
        assert!(path.exists());
    }
}
