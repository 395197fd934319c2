use serde::{Deserialize, Serialize};

/// Both paths empty turns TLS off and the listener serves plain HTTP.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
    /// Seconds allowed for reading both files during a reload, 0 for no limit.
    pub reload_timeout: u64,
}
