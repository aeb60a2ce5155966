//! `.coe` initialization-vector rendering and file emission.
//!
//! Renders each bank's word sequence in the radix-16 `.coe` format consumed by
//! memory preload tooling:
//!
//! ```text
//! memory_initialization_radix=16;
//! memory_initialization_vector=
//! 2000,
//! ...
//! 10E0FC;
//! ```
//!
//! Words are uppercase hex, unprefixed and unpadded; every line but the last
//! ends with a comma and the last with a semicolon. Each file is fully written
//! and closed before the next begins. The output directory must already
//! exist — no directory creation is attempted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{BANK_FILE_PREFIX, NUM_BANKS};
use crate::common::error::GenError;
use crate::store::BankStore;

/// Renders one bank's word sequence as `.coe` file contents.
///
/// Deterministic: the same words always render to the same bytes, so repeated
/// runs produce byte-identical files.
///
/// # Arguments
///
/// * `words` - The bank's ordered word sequence.
///
/// # Returns
///
/// The complete file contents, headers included.
pub fn render_bank(words: &[u32]) -> String {
    let mut out = String::new();
    out.push_str("memory_initialization_radix=16;\n");
    out.push_str("memory_initialization_vector=\n");
    for (i, word) in words.iter().enumerate() {
        let terminator = if i + 1 < words.len() { ',' } else { ';' };
        out.push_str(&format!("{word:X}{terminator}\n"));
    }
    out
}

/// Writes one `.coe` file per bank into `dir`.
///
/// Files are named `mem_bank_<id>.coe` and created or overwritten in bank id
/// order.
///
/// # Arguments
///
/// * `store` - The populated bank store to serialize.
/// * `dir` - Output directory; must already exist.
///
/// # Returns
///
/// The paths of the written files, in bank id order.
///
/// # Errors
///
/// Returns [`GenError::Io`] if any file cannot be created or written, most
/// commonly because `dir` does not exist.
pub fn write_bank_files(store: &BankStore, dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut written = Vec::with_capacity(NUM_BANKS);
    for (id, words) in store.banks().enumerate() {
        let path = dir.join(format!("{BANK_FILE_PREFIX}{id}.coe"));
        let contents = render_bank(words);
        fs::write(&path, contents).map_err(|source| GenError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
