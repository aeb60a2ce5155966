//! # Interleaving Transform Tests
//!
//! Verifies the conflict-free mapping: hand-computed slots, the exhaustive
//! bijection over the default range, and the no-adjacent-conflict property
//! the interleaving exists for.

use std::collections::HashSet;

use bankgen_core::common::addr::{BankAddr, LinearAddr};
use bankgen_core::common::constants::{DEFAULT_DEPTH, NUM_BANKS};
use bankgen_core::mapping::map_addr;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Hand-computed slots
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0, 0, 0)] // (0 + 0) % 4 = 0
#[case(1, 1, 0)] // (1 + 0) % 4 = 1
#[case(3, 3, 0)] // (3 + 0) % 4 = 3
#[case(4, 2, 1)] // (4 + 2) % 4 = 2
#[case(5, 3, 1)] // (5 + 2) % 4 = 3
#[case(7, 1, 1)] // (7 + 2) % 4 = 1
#[case(32, 0, 8)] // (0 + 16) % 4 = 0
#[case(127, 1, 31)] // (31 + 62) % 4 = 1
fn known_slots(#[case] addr: u32, #[case] bank: u32, #[case] offset: u32) {
    assert_eq!(map_addr(LinearAddr::new(addr)), BankAddr::new(bank, offset));
}

// ══════════════════════════════════════════════════════════
// 2. Bijection over the default range
// ══════════════════════════════════════════════════════════

/// All 128 addresses map to 128 distinct slots covering every bank and every
/// offset — the mapping is a bijection onto `{0..4} x [0, 32)`.
#[test]
fn mapping_is_a_bijection() {
    let words_per_bank = (DEFAULT_DEPTH / NUM_BANKS) as u32;
    let mut seen = HashSet::new();

    for a in 0..DEFAULT_DEPTH as u32 {
        let slot = map_addr(LinearAddr::new(a));
        assert!(slot.bank < NUM_BANKS as u32, "address {a}: bank out of range");
        assert!(
            slot.offset < words_per_bank,
            "address {a}: offset out of range"
        );
        assert!(
            seen.insert((slot.bank, slot.offset)),
            "address {a}: slot ({}, {}) assigned twice",
            slot.bank,
            slot.offset
        );
    }

    assert_eq!(seen.len(), DEFAULT_DEPTH);
}

/// The bijection is not specific to depth 128: any depth divisible by 4 is
/// covered exactly.
#[test]
fn mapping_is_a_bijection_for_other_depths() {
    for depth in [4u32, 32, 64, 256] {
        let mut seen = HashSet::new();
        for a in 0..depth {
            assert!(seen.insert(map_addr(LinearAddr::new(a))), "depth {depth}");
        }
        assert_eq!(seen.len(), depth as usize);
    }
}

// ══════════════════════════════════════════════════════════
// 3. Conflict freedom
// ══════════════════════════════════════════════════════════

/// Sequentially accessed addresses never land in the same bank, including
/// across group-of-four boundaries.
#[test]
fn consecutive_addresses_use_different_banks() {
    for a in 0..DEFAULT_DEPTH as u32 - 1 {
        let here = map_addr(LinearAddr::new(a));
        let next = map_addr(LinearAddr::new(a + 1));
        assert_ne!(here.bank, next.bank, "addresses {a} and {} conflict", a + 1);
    }
}

/// Each group of four consecutive addresses shares one offset and covers all
/// four banks.
#[test]
fn each_group_of_four_covers_all_banks() {
    for group in 0..(DEFAULT_DEPTH / NUM_BANKS) as u32 {
        let slots: Vec<_> = (0..4).map(|r| map_addr(LinearAddr::new(4 * group + r))).collect();
        let banks: HashSet<_> = slots.iter().map(|s| s.bank).collect();
        assert_eq!(banks.len(), NUM_BANKS, "group {group}");
        assert!(slots.iter().all(|s| s.offset == group), "group {group}");
    }
}
