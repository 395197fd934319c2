use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::installed_pair::InstalledPair;

/// Something a trigger can ask to reload its certificates.
///
/// Triggers only see this trait, never the reloader behind it.
pub trait Reloadable: Send + Sync {
    fn reload_certificates(&self) -> Result<InstalledPair, CertificateError>;

    fn describe(&self) -> String;
}
