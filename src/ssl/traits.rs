//! Seams of the certificate hot-reload core.

/// Source of certificate and key bytes.
pub mod certificate_source;
