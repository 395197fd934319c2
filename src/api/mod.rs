//! Certificate management API.
//!
//! # Endpoints
//!
//! - `GET /api/certificate/status` - Paths, expiry, fingerprint and last failure of the served pair
//! - `POST /api/certificate/reload` - Reload the pair from disk without restarting the listener
//!
//! # Authentication
//!
//! Both endpoints require the configured API key as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Route registration and token validation.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate status and reload handlers.
pub mod api_certificate;
