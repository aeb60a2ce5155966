//! # Generator Run Tests
//!
//! End-to-end tests for the one-shot run: file set, known contents, repeat
//! determinism, and error propagation from emission.

use std::fs;

use bankgen_core::common::constants::NUM_BANKS;
use bankgen_core::{generator, Config, GenError};
use pretty_assertions::assert_eq;

#[test]
fn run_writes_all_bank_files() {
    let dir = tempfile::tempdir().unwrap();
    let written = generator::run(&Config::default(), dir.path()).unwrap();

    assert_eq!(written.len(), NUM_BANKS);
    for (id, path) in written.iter().enumerate() {
        let contents = fs::read_to_string(path).unwrap();
        // 2 header lines + 128 / 4 value lines per bank.
        assert_eq!(contents.lines().count(), 2 + 32, "bank {id}");
    }
}

/// The head of bank 0 is fixed by the mapping: addresses 0, 6, and 8 in that
/// order.
#[test]
fn run_known_bank_zero_head() {
    let dir = tempfile::tempdir().unwrap();
    let written = generator::run(&Config::default(), dir.path()).unwrap();

    let bank_0 = fs::read_to_string(&written[0]).unwrap();
    let lines: Vec<_> = bank_0.lines().collect();
    assert_eq!(lines[2], "2000,"); // address 0
    assert_eq!(lines[3], "E00C,"); // address 6
    assert_eq!(lines[4], "12010,"); // address 8
}

/// Two runs with unchanged configuration produce byte-identical output.
#[test]
fn run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();

    let first = generator::run(&config, dir.path()).unwrap();
    let snapshots: Vec<_> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let _ = generator::run(&config, dir.path()).unwrap();
    for (path, snapshot) in first.iter().zip(&snapshots) {
        assert_eq!(&fs::read(path).unwrap(), snapshot);
    }
}

/// A smaller depth shrinks every bank accordingly.
#[test]
fn run_respects_configured_depth() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.array.depth = 64;

    let written = generator::run(&config, dir.path()).unwrap();
    for path in &written {
        assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 2 + 16);
    }
}

/// Emission errors propagate out of the run untouched.
#[test]
fn run_propagates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("imports");

    let err = generator::run(&Config::default(), &missing).unwrap_err();
    let GenError::Io { path, .. } = err;
    assert!(path.starts_with(&missing));
}
