//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTPS listener settings (address, workers, timeouts).
pub mod http_server_config;

/// Certificate and key locations.
pub mod tls_config;

/// Reload trigger settings.
pub mod reload_config;

/// Certificate management API settings.
pub mod api_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
