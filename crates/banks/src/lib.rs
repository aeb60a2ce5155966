//! Bank-interleaved memory initialization generator library.
//!
//! This crate computes a conflict-free interleaved address mapping for a
//! 4-bank memory array and renders each bank's contents as a radix-16 `.coe`
//! initialization file for memory preload tooling. It provides:
//! 1. **Common:** Strong address types, array constants, and error types.
//! 2. **Pattern:** The test-word generator packing two 12-bit fields per address.
//! 3. **Mapping:** The linear-address to (bank, offset) interleaving transform.
//! 4. **Store:** The zero-initialized per-bank word store and its population pass.
//! 5. **Emission:** `.coe` rendering, file output, and the one-shot generator run.

/// Common types and constants (addresses, array geometry, errors).
pub mod common;
/// `.coe` initialization-vector rendering and file emission.
pub mod coe;
/// Generator configuration (defaults and hierarchical config structures).
pub mod config;
/// One-shot generator run composing pattern, mapping, store, and emission.
pub mod generator;
/// Conflict-free linear-address to (bank, offset) mapping.
pub mod mapping;
/// Test-word value generator.
pub mod pattern;
/// Per-bank word store and its population pass.
pub mod store;

/// Error type for emission failures; carries the offending path.
pub use crate::common::error::GenError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Per-bank word store; construct with `BankStore::new` and fill with `populate`.
pub use crate::store::BankStore;
