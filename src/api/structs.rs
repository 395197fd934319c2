//! Data structures for the certificate management API.

/// Query parameter for API token authentication.
pub mod query_token;

/// Shared data context for request handlers.
pub mod api_service_data;

/// Response bodies of the certificate endpoints.
pub mod api_certificate;
