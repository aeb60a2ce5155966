//! Array geometry and output naming constants.
//!
//! These values describe the fixed hardware target: a 4-bank interleaved RAM
//! array preloaded from radix-16 `.coe` files.

/// Number of independent memory banks in the array.
///
/// The interleaving transform and the file emitter both assume exactly this
/// many banks; it matches the RTL the generated files feed.
pub const NUM_BANKS: usize = 4;

/// Default total address depth of the array (words across all banks).
///
/// Must be a multiple of [`NUM_BANKS`] so every bank receives the same number
/// of words.
pub const DEFAULT_DEPTH: usize = 128;

/// Width of each packed field in a test word, in bits.
///
/// Each word carries two adjacent samples as 12-bit fields, giving a 24-bit
/// word (6 hex digits).
pub const FIELD_BITS: u32 = 12;

/// Modular window applied to the address before bank selection.
///
/// The bank-select equation folds the address through this window before the
/// doubled-slide term is added; 32 addresses per window.
pub const SLIDE_WINDOW: u32 = 32;

/// File name prefix for emitted bank files (`mem_bank_<id>.coe`).
pub const BANK_FILE_PREFIX: &str = "mem_bank_";

/// Output directory the CLI emits into, relative to the working directory.
///
/// The directory is expected to exist; the generator does not create it.
pub const OUTPUT_DIR: &str = "imports";
