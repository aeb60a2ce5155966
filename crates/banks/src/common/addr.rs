//! Linear address and bank slot types.
//!
//! This module defines strong types for the two address spaces the generator
//! deals with, to prevent accidental mixing of flat indices and bank-relative
//! offsets. It provides the following:
//! 1. **Type Safety:** Distinguishes the flat input index space from bank slots.
//! 2. **Slot Representation:** A (bank, offset) pair naming one word in the array.

/// A linear address in the flat input index space `[0, depth)`.
///
/// Linear addresses are what a consumer of the memory array issues; the
/// interleaving transform maps each one to a [`BankAddr`] before storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearAddr(pub u32);

/// One slot in the banked array: a bank id and a word offset within that bank.
///
/// Bank ids range over `[0, 4)` and offsets over `[0, depth / 4)`; the mapping
/// in [`crate::mapping`] assigns every linear address exactly one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BankAddr {
    /// Bank id in `[0, 4)`.
    pub bank: u32,
    /// Word offset within the bank, in `[0, depth / 4)`.
    pub offset: u32,
}

impl LinearAddr {
    /// Creates a new linear address from a raw index.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw flat index value.
    ///
    /// # Returns
    ///
    /// A new `LinearAddr` wrapping the provided index.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw index value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }
}

impl BankAddr {
    /// Creates a new bank slot from a bank id and word offset.
    ///
    /// # Arguments
    ///
    /// * `bank` - Bank id in `[0, 4)`.
    /// * `offset` - Word offset within the bank.
    ///
    /// # Returns
    ///
    /// A new `BankAddr` naming that slot.
    #[inline(always)]
    pub const fn new(bank: u32, offset: u32) -> Self {
        Self { bank, offset }
    }
}
