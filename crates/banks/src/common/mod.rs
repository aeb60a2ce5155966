//! Common utilities and types shared across the generator.
//!
//! This module provides the fundamental building blocks used by every stage of
//! the generator. It includes:
//! 1. **Address Types:** Strong types for linear addresses and bank slots.
//! 2. **Constants:** Array geometry and output naming constants.
//! 3. **Error Handling:** The emission error type.

/// Address type definitions (linear addresses and bank slots).
pub mod addr;

/// Array geometry and output naming constants.
pub mod constants;

/// Error types for file emission.
pub mod error;

pub use addr::{BankAddr, LinearAddr};
pub use constants::{DEFAULT_DEPTH, NUM_BANKS};
pub use error::GenError;
