use crate::reload::traits::reloadable::Reloadable;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::cert_reloader::CertReloader;
use crate::ssl::structs::installed_pair::InstalledPair;

impl Reloadable for CertReloader {
    fn reload_certificates(&self) -> Result<InstalledPair, CertificateError> {
        self.reload_installed(self.read_timeout())
    }

    fn describe(&self) -> String {
        let paths = self.paths();
        format!("{} + {}", paths.cert_path, paths.key_path)
    }
}
