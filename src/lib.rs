//! # hotcert
//!
//! TLS termination for long-running servers whose certificate and private key
//! change while the process keeps running.
//!
//! ## Overview
//!
//! The core is a certificate store with a lock-free atomic swap and a reloader
//! that loads a certificate chain and private key from disk, checks that the
//! key belongs to the leaf certificate and installs the pair. Every TLS
//! handshake reads the store; no handshake waits on disk I/O and no handshake
//! ever sees a torn pair. A reload that fails leaves the previous pair in
//! service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hotcert::ssl::structs::cert_reloader::CertReloader;
//! use hotcert::ssl::ssl::create_server_config_with_resolver;
//!
//! let reloader = CertReloader::new("cert.pem", "key.pem")?;
//! let tls_config = create_server_config_with_resolver(reloader.resolver())?;
//! // ... hand tls_config to the listener ...
//! reloader.reload()?;
//! ```
//!
//! ## Modules
//!
//! - [`ssl`] - Certificate store, reloader and rustls resolver
//! - [`reload`] - Interval, file watch and signal reload triggers
//! - [`api`] - Certificate status and reload endpoints
//! - [`http`] - HTTPS listener wiring
//! - [`config`] - TOML configuration
//! - [`common`] - Logging setup and shared errors
//! - [`structs`] - CLI arguments

/// Certificate management API.
pub mod api;

/// Logging setup and shared errors.
pub mod common;

/// Configuration management module.
///
/// Loads, validates and generates the TOML configuration file.
pub mod config;

/// HTTPS listener backed by the hot-reloadable certificate store.
pub mod http;

/// Reload triggers.
///
/// Decide when certificates are reloaded; the certificate core itself is
/// agnostic to this.
pub mod reload;

/// Certificate hot-reload core.
///
/// Provides the certificate store, the reloader and the rustls resolver that
/// serves the current pair to every handshake.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
