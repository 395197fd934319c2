/// A freshly generated self-signed certificate and its key, PEM encoded.
#[derive(Debug, Clone)]
pub struct SelfSignedPem {
    pub cert_pem: String,
    pub key_pem: String,
}
