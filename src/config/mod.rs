//! Configuration management module.
//!
//! Loads and validates the TOML configuration file.
//!
//! # Configuration Structure
//!
//! - **http_server**: HTTPS listener address, workers and timeouts
//! - **tls**: certificate and key paths, read deadline for reloads
//! - **reload**: which reload triggers run (interval, file watch, SIGHUP)
//! - **api**: certificate management endpoints and their token
//! - **sentry_config**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

pub mod tests;
