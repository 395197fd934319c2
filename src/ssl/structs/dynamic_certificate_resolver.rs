use crate::ssl::types::GetCertificateFn;

/// rustls certificate resolver backed by a reloader's accessor.
pub struct DynamicCertificateResolver {
    pub(crate) get_certificate: GetCertificateFn,
}
