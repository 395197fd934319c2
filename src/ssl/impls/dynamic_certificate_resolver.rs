use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::types::GetCertificateFn;
use log::error;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver").finish_non_exhaustive()
    }
}

impl DynamicCertificateResolver {
    pub fn new(get_certificate: GetCertificateFn) -> Self {
        Self { get_certificate }
    }

    pub fn resolve_for(&self, info: &HandshakeInfo) -> Option<Arc<CertifiedKey>> {
        match (self.get_certificate)(info) {
            Ok(pair) => Some(pair.certified_key()),
            Err(e) => {
                error!(
                    "[CERTIFICATE] No certificate for handshake (sni={}): {}",
                    info.server_name.as_deref().unwrap_or("-"),
                    e
                );
                None
            }
        }
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.resolve_for(&HandshakeInfo::from_client_hello(&client_hello))
    }
}
