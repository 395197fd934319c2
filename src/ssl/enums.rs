//! Enumerations for the certificate hot-reload core.

/// Error kinds produced while loading or serving a certificate pair.
pub mod certificate_error;

/// Lifecycle of a certificate reloader.
pub mod reloader_state;
