use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Unable to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        path: String,
        reason: String,
    },
    #[error("Private key {key_path} does not match the public key of certificate {cert_path}")]
    KeyMismatch {
        cert_path: String,
        key_path: String,
    },
    #[error("No certificate has been loaded yet")]
    NoCertificate,
    #[error("Reading the certificate files did not finish within {timeout:?}")]
    Timeout {
        timeout: Duration,
    },
}
