//! Test-word value generator.
//!
//! Each linear address carries a deterministic 24-bit word packing two
//! adjacent 12-bit samples, so a consumer reading address `a` sees both its
//! own sample and the next one:
//!
//! ```text
//! word(a) = (2a) | (2(a+1) << 12)
//! ```
//!
//! Pure arithmetic, no failure modes; at the supported depths the high field
//! stays well inside 12 bits.

use crate::common::addr::LinearAddr;
use crate::common::constants::FIELD_BITS;

/// Returns the test word for a linear address.
///
/// The low field is `2a` and the high field is `2(a + 1)`, shifted into the
/// upper 12 bits.
///
/// # Arguments
///
/// * `addr` - The linear address to generate a word for.
///
/// # Returns
///
/// The packed 24-bit word as a `u32`.
#[inline(always)]
pub const fn test_word(addr: LinearAddr) -> u32 {
    let lo = 2 * addr.val();
    let hi = 2 * (addr.val() + 1);
    lo | (hi << FIELD_BITS)
}
