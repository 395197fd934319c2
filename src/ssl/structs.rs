//! Data structures of the certificate hot-reload core.

/// Parsed, verified certificate chain plus private key.
pub mod certificate_pair;

/// Lock-free holder of the active certificate pair.
pub mod certificate_store;

/// Certificate and key file locations.
pub mod certificate_paths;

/// Filesystem implementation of the certificate source.
pub mod file_certificate_source;

/// Handshake metadata passed to the certificate accessor.
pub mod handshake_info;

/// Record of the last failed load attempt.
pub mod reload_failure;

/// A pair and the generation it was installed as.
pub mod installed_pair;

/// Loader and installer of certificate pairs.
pub mod cert_reloader;

/// rustls resolver adapter.
pub mod dynamic_certificate_resolver;

/// PEM output of the development certificate generator.
pub mod self_signed_pem;
