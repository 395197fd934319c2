//! Implementation blocks for common types.

pub mod custom_error;
