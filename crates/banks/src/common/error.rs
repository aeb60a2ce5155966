//! Error types for file emission.
//!
//! The generator has a single failure surface: writing the `.coe` files. All
//! earlier stages are pure arithmetic over a fixed range and cannot fail.
//! There is deliberately no recovery or partial-output cleanup; the CLI
//! reports the error and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while emitting bank initialization files.
#[derive(Debug, Error)]
pub enum GenError {
    /// An output file could not be created or written.
    ///
    /// The most common cause is a missing output directory: the generator
    /// never creates directories, so emitting into a non-existent `imports/`
    /// fails here. Permission and disk errors surface the same way.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
