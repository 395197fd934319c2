use crate::ssl::structs::certificate_pair::CertificatePair;
use arc_swap::ArcSwapOption;
use std::sync::atomic::AtomicU64;

/// Holder of the certificate pair currently served to handshakes.
///
/// Reads are a single atomic pointer load; a replace swaps the whole pair.
pub struct CertificateStore {
    pub(crate) current: ArcSwapOption<CertificatePair>,
    pub(crate) generation: AtomicU64,
}
