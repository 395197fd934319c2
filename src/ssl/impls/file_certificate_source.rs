use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::traits::certificate_source::CertificateSource;

impl FileCertificateSource {
    pub fn new(cert_path: impl Into<String>, key_path: impl Into<String>) -> Self {
        Self {
            paths: CertificatePaths {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
            },
        }
    }

    fn read(path: &str) -> Result<Vec<u8>, CertificateError> {
        std::fs::read(path).map_err(|source| CertificateError::FileRead {
            path: path.to_string(),
            source,
        })
    }
}

impl From<CertificatePaths> for FileCertificateSource {
    fn from(paths: CertificatePaths) -> Self {
        Self { paths }
    }
}

impl CertificateSource for FileCertificateSource {
    fn read_certificate(&self) -> Result<Vec<u8>, CertificateError> {
        Self::read(&self.paths.cert_path)
    }

    fn read_key(&self) -> Result<Vec<u8>, CertificateError> {
        Self::read(&self.paths.key_path)
    }

    fn paths(&self) -> CertificatePaths {
        self.paths.clone()
    }
}
