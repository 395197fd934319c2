use crate::ssl::enums::reloader_state::ReloaderState;
use crate::ssl::structs::reload_failure::ReloadFailure;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CertificateStatusItem {
    pub cert_path: String,
    pub key_path: String,
    pub state: ReloaderState,
    pub generation: u64,
    pub loaded_at: Option<String>,
    pub not_before: Option<String>,
    pub not_after: Option<String>,
    pub subject: Option<String>,
    pub fingerprint: Option<String>,
    pub last_failure: Option<ReloadFailure>,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadResult {
    pub loaded_at: String,
    pub not_after: Option<String>,
    pub fingerprint: String,
    pub generation: u64,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadError {
    pub kind: &'static str,
    pub error: String,
}
