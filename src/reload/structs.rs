//! Data structures used by reload triggers.

/// File modification snapshot for the watch trigger.
pub mod watched_files;

/// Loaded and reported snapshots of the watch trigger.
pub mod watch_state;
