//! Common data structures.

/// Plain message error used at process boundaries.
pub mod custom_error;
