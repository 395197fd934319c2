//! Trigger-facing capability.

pub mod reloadable;
