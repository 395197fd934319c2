//! HTTP(S) listener.
//!
//! With a certificate configured, binds actix-web with a rustls configuration
//! whose certificate resolver is the reloader's handshake accessor. Without
//! one, binds plain HTTP. Serves `/health` and, when enabled, the certificate
//! management API.

#[allow(clippy::module_inception)]
pub mod http;
