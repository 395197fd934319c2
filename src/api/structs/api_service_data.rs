//! Shared data context for API request handlers.

use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::cert_reloader::CertReloader;
use std::sync::Arc;

/// Shared application data available to all request handlers.
///
/// Injected into actix-web's application data; both fields are `Arc`s shared
/// across worker threads.
#[derive(Debug)]
pub struct ApiServiceData {
    /// The reloader whose store backs the TLS listener; `None` when the
    /// listener serves plain HTTP.
    pub cert_reloader: Option<Arc<CertReloader>>,

    pub config: Arc<Configuration>,
}
