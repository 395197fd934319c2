//! Common utilities and shared functionality.
//!
//! - Logging setup (fern, colored levels, local timestamps)
//! - `CustomError`, a message-only error for startup failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

pub mod tests;
