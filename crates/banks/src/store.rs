//! Per-bank word store and its population pass.
//!
//! The store is a locally scoped container created for a single generator run:
//! 4 ordered word sequences, zero-initialized, filled in one pass over the
//! linear address range and then handed to the emitter. Given a depth that is
//! a multiple of 4, the mapping writes every slot in every bank exactly once.

use tracing::debug;

use crate::common::addr::LinearAddr;
use crate::common::constants::NUM_BANKS;
use crate::config::GeneralConfig;
use crate::mapping;
use crate::pattern;

/// Zero-initialized word storage for the 4 banks of the array.
///
/// Construct with [`BankStore::new`], fill with [`BankStore::populate`], and
/// read back per bank in id order for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankStore {
    banks: [Vec<u32>; NUM_BANKS],
    depth: usize,
}

impl BankStore {
    /// Creates a store for the given total address depth.
    ///
    /// Each of the 4 banks is allocated `depth / 4` words, all zero.
    ///
    /// # Arguments
    ///
    /// * `depth` - Total address depth across all banks.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is not a multiple of the bank count; the interleaving
    /// only covers whole groups of 4 addresses.
    pub fn new(depth: usize) -> Self {
        assert!(
            depth.is_multiple_of(NUM_BANKS),
            "array depth {depth} is not a multiple of {NUM_BANKS} banks"
        );
        let words = depth / NUM_BANKS;
        Self {
            banks: std::array::from_fn(|_| vec![0; words]),
            depth,
        }
    }

    /// Fills every bank by walking the linear address range in order.
    ///
    /// For each address `a` in `[0, depth)`, computes the test word and the
    /// bank slot and stores the word there. When `general.trace_mapping` is
    /// set, emits a per-address mapping trace and before/after bank dumps
    /// through `tracing` (a debugging aid, not a stable interface).
    ///
    /// # Arguments
    ///
    /// * `general` - General options; carries the trace gate.
    pub fn populate(&mut self, general: &GeneralConfig) {
        if general.trace_mapping {
            debug!("bank store before populate: {:X?}", self.banks);
        }

        for a in 0..self.depth as u32 {
            let addr = LinearAddr::new(a);
            let word = pattern::test_word(addr);
            let slot = mapping::map_addr(addr);
            if general.trace_mapping {
                debug!(
                    "addr {a:3} -> bank {} offset {:2} word {word:X}",
                    slot.bank, slot.offset
                );
            }
            self.banks[slot.bank as usize][slot.offset as usize] = word;
        }

        if general.trace_mapping {
            debug!("bank store after populate: {:X?}", self.banks);
        }
    }

    /// Returns the ordered word sequence of one bank.
    ///
    /// # Arguments
    ///
    /// * `id` - Bank id in `[0, 4)`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid bank id.
    #[inline]
    pub fn bank(&self, id: usize) -> &[u32] {
        &self.banks[id]
    }

    /// Returns the total address depth the store was created for.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of words held by each bank.
    #[inline]
    pub const fn words_per_bank(&self) -> usize {
        self.depth / NUM_BANKS
    }

    /// Iterates over the banks in id order.
    pub fn banks(&self) -> impl Iterator<Item = &[u32]> {
        self.banks.iter().map(Vec::as_slice)
    }
}
