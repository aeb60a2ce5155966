//! Conflict-free linear-address to (bank, offset) mapping.
//!
//! This module implements the interleaving transform that distributes a flat
//! address range across the 4 banks so that sequential accesses never hit the
//! same bank twice in a row. The transform is:
//!
//! ```text
//! offset(a) = a / 4
//! bank(a)   = (a mod 32 + 2 * (a / 4)) mod 4
//! ```
//!
//! The `a mod 32` term is congruent to `a mod 4` modulo 4, so within each
//! group of four consecutive addresses (one shared offset, slide `s = a / 4`)
//! the selected banks are `{2s, 2s+1, 2s+2, 2s+3} mod 4` — all four banks,
//! rotated by the doubled slide. The transform is therefore a bijection onto
//! `[0, 4) x [0, depth / 4)` for any depth divisible by 4, and consecutive
//! addresses always land in different banks, including across group
//! boundaries.

use crate::common::addr::{BankAddr, LinearAddr};
use crate::common::constants::{NUM_BANKS, SLIDE_WINDOW};

/// Maps a linear address to its bank slot.
///
/// # Arguments
///
/// * `addr` - The linear address to map.
///
/// # Returns
///
/// The `(bank, offset)` slot assigned to `addr`.
#[inline(always)]
pub const fn map_addr(addr: LinearAddr) -> BankAddr {
    let a = addr.val();
    let slide = a / NUM_BANKS as u32;
    let bank = (a % SLIDE_WINDOW + 2 * slide) % NUM_BANKS as u32;
    BankAddr::new(bank, slide)
}
