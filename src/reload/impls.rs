//! Implementation blocks for reload triggers.

/// `Reloadable` for the certificate reloader.
pub mod cert_reloader;

pub mod watched_files;

pub mod watch_state;
