use crate::ssl::enums::certificate_error::CertificateError;

impl CertificateError {
    /// Stable name of the error kind, used in log records and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            CertificateError::FileRead { .. } => "file_read",
            CertificateError::Parse { .. } => "parse",
            CertificateError::KeyMismatch { .. } => "key_mismatch",
            CertificateError::NoCertificate => "no_certificate",
            CertificateError::Timeout { .. } => "timeout",
        }
    }
}
