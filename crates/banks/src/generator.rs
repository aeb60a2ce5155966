//! One-shot generator run.
//!
//! Composes the three stages — value generation, address mapping, and file
//! emission — into a single deterministic pass. There is no state machine and
//! no retry: the run either writes all 4 files or returns the first emission
//! error.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::coe;
use crate::common::error::GenError;
use crate::config::Config;
use crate::store::BankStore;

/// Runs the generator: builds and populates the bank store, then emits one
/// `.coe` file per bank into `out_dir`.
///
/// # Arguments
///
/// * `config` - Generator configuration (depth and trace gate).
/// * `out_dir` - Output directory; must already exist.
///
/// # Returns
///
/// The paths of the written files, in bank id order.
///
/// # Errors
///
/// Returns [`GenError::Io`] if any output file cannot be written.
///
/// # Panics
///
/// Panics if `config.array.depth` is not a multiple of the bank count.
pub fn run(config: &Config, out_dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut store = BankStore::new(config.array.depth);
    store.populate(&config.general);

    let written = coe::write_bank_files(&store, out_dir)?;
    info!(
        "wrote {} bank files ({} words per bank)",
        written.len(),
        store.words_per_bank()
    );
    Ok(written)
}
