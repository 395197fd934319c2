//! TLS certificate hot-reload core.
//!
//! A [`structs::certificate_store::CertificateStore`] holds the certificate
//! pair served to handshakes and swaps it atomically. A
//! [`structs::cert_reloader::CertReloader`] reads a certificate chain and a
//! private key, checks that they belong together and installs them into the
//! store. The listener is never restarted.
//!
//! # Guarantees
//!
//! - A handshake sees a whole pair, old or new, never a mix of both
//! - A failed reload leaves the previous pair in service
//! - The handshake path performs no I/O and takes no lock
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::ssl::structs::cert_reloader::CertReloader;
//! use hotcert::ssl::ssl::create_server_config_with_resolver;
//!
//! let reloader = CertReloader::new("cert.pem", "key.pem")?;
//! let tls_config = create_server_config_with_resolver(reloader.resolver())?;
//!
//! // Later, after the files were replaced on disk:
//! reloader.reload()?;
//! ```
//!
//! When a reload happens is decided elsewhere; see [`crate::reload`].

pub mod enums;

pub mod structs;

pub mod traits;

pub mod impls;

pub mod types;

/// Store construction, rustls configuration and development certificates.
#[allow(clippy::module_inception)]
pub mod ssl;
