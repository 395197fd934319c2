use crate::ssl::structs::certificate_pair::CertificatePair;
use std::sync::Arc;

/// A pair together with the store generation its install produced.
#[derive(Debug, Clone)]
pub struct InstalledPair {
    pub pair: Arc<CertificatePair>,
    pub generation: u64,
}
