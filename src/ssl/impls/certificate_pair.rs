use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_pair::CertificatePair;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use chrono::{DateTime, Utc};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use sha1::{Digest, Sha1};
use std::sync::Arc;

impl std::fmt::Debug for CertificatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificatePair")
            .field("certs_count", &self.certified_key.cert.len())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("subject", &self.subject)
            .field("not_after", &self.not_after)
            .field("fingerprint", &self.fingerprint)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificatePair {
    /// Parses a PEM certificate chain and a PEM private key (PKCS#8, PKCS#1 or
    /// SEC1) and verifies that the key belongs to the leaf certificate.
    pub fn from_pem(
        cert_pem: &[u8],
        key_pem: &[u8],
        paths: &CertificatePaths,
    ) -> Result<Self, CertificateError> {
        let certs = parse_certificate_chain(cert_pem, &paths.cert_path)?;
        let key = parse_private_key(key_pem, &paths.key_path)?;
        Self::from_der(certs, key, paths)
    }

    pub fn from_der(
        certs: Vec<CertificateDer<'static>>,
        key: PrivateKeyDer<'static>,
        paths: &CertificatePaths,
    ) -> Result<Self, CertificateError> {
        if certs.is_empty() {
            return Err(CertificateError::Parse {
                path: paths.cert_path.clone(),
                reason: "no certificates found".to_string(),
            });
        }
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::Parse {
                path: paths.key_path.clone(),
                reason: format!("unsupported private key: {}", e),
            })?;
        let certified_key = CertifiedKey::new(certs, signing_key);

        // An underivable public key counts as a mismatch.
        match certified_key.keys_match() {
            Ok(()) => {}
            Err(rustls::Error::InconsistentKeys(_)) => {
                return Err(CertificateError::KeyMismatch {
                    cert_path: paths.cert_path.clone(),
                    key_path: paths.key_path.clone(),
                });
            }
            Err(e) => {
                return Err(CertificateError::Parse {
                    path: paths.cert_path.clone(),
                    reason: e.to_string(),
                });
            }
        }

        let leaf = certified_key.cert[0].as_ref();
        let fingerprint = hex::encode(Sha1::digest(leaf).as_slice());
        let (subject, not_before, not_after) = match x509_parser::parse_x509_certificate(leaf) {
            Ok((_, x509)) => {
                let validity = x509.validity();
                (
                    Some(x509.subject().to_string()),
                    DateTime::<Utc>::from_timestamp(validity.not_before.timestamp(), 0),
                    DateTime::<Utc>::from_timestamp(validity.not_after.timestamp(), 0),
                )
            }
            Err(_) => (None, None, None),
        };

        Ok(CertificatePair {
            certified_key: Arc::new(certified_key),
            private_key: key,
            loaded_at: Utc::now(),
            cert_path: paths.cert_path.clone(),
            key_path: paths.key_path.clone(),
            subject,
            not_before,
            not_after,
            fingerprint,
        })
    }

    /// The chain as presented to clients, leaf first.
    pub fn certificate_chain(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }

    pub fn private_key(&self) -> &PrivateKeyDer<'static> {
        &self.private_key
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified_key)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn paths(&self) -> CertificatePaths {
        CertificatePaths {
            cert_path: self.cert_path.clone(),
            key_path: self.key_path.clone(),
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.not_before
    }

    /// Expiry of the leaf certificate, when it could be decoded.
    pub fn not_after(&self) -> Option<DateTime<Utc>> {
        self.not_after
    }

    /// Hex encoded SHA-1 of the leaf certificate DER.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

pub fn parse_certificate_chain(
    pem: &[u8],
    path: &str,
) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let mut reader = pem;
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    if certs.is_empty() {
        return Err(CertificateError::Parse {
            path: path.to_string(),
            reason: "no certificates found in file".to_string(),
        });
    }
    Ok(certs)
}

pub fn parse_private_key(
    pem: &[u8],
    path: &str,
) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let mut reader = pem;
    match rustls_pemfile::private_key(&mut reader) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(CertificateError::Parse {
            path: path.to_string(),
            reason: "no private key found in file".to_string(),
        }),
        Err(e) => Err(CertificateError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        }),
    }
}
