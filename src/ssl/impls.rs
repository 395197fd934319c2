//! Implementation blocks for the certificate hot-reload core.

pub mod certificate_error;

pub mod reloader_state;

/// PEM parsing and key matching for certificate pairs.
pub mod certificate_pair;

/// Atomic read and replace of the active pair.
pub mod certificate_store;

pub mod file_certificate_source;

pub mod handshake_info;

/// Load, verify, install; plus the handshake accessor.
pub mod cert_reloader;

pub mod dynamic_certificate_resolver;
