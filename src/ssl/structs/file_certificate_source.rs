use crate::ssl::structs::certificate_paths::CertificatePaths;

/// Reads the certificate chain and the private key from two files on disk.
#[derive(Debug, Clone)]
pub struct FileCertificateSource {
    pub(crate) paths: CertificatePaths,
}
