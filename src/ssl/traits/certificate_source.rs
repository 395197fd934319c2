use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_paths::CertificatePaths;

/// Where a reloader reads the PEM encoded certificate chain and private key from.
///
/// Every call must return the complete current content; implementations do not
/// cache between calls.
#[cfg_attr(test, mockall::automock)]
pub trait CertificateSource: Send + Sync {
    fn read_certificate(&self) -> Result<Vec<u8>, CertificateError>;

    fn read_key(&self) -> Result<Vec<u8>, CertificateError>;

    fn paths(&self) -> CertificatePaths;
}
