use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_pair::CertificatePair;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use std::sync::Arc;

/// Accessor invoked once per TLS handshake.
pub type GetCertificateFn = Arc<dyn Fn(&HandshakeInfo) -> Result<Arc<CertificatePair>, CertificateError> + Send + Sync>;
