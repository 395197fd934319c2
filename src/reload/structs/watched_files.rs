use std::time::SystemTime;

/// Modification times of the certificate and key files at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFiles {
    pub cert_modified: Option<SystemTime>,
    pub key_modified: Option<SystemTime>,
}
