use chrono::{DateTime, Utc};
use rustls::pki_types::PrivateKeyDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A certificate chain and the private key of its leaf, parsed and verified.
///
/// Pairs are only built by [`CertificatePair::from_pem`] or
/// [`CertificatePair::from_der`], after the key has been matched against the
/// leaf certificate. Once built, a pair is never mutated.
pub struct CertificatePair {
    pub(crate) certified_key: Arc<CertifiedKey>,
    pub(crate) private_key: PrivateKeyDer<'static>,
    pub(crate) loaded_at: DateTime<Utc>,
    pub(crate) cert_path: String,
    pub(crate) key_path: String,
    pub(crate) subject: Option<String>,
    pub(crate) not_before: Option<DateTime<Utc>>,
    pub(crate) not_after: Option<DateTime<Utc>>,
    pub(crate) fingerprint: String,
}
