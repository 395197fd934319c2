use crate::common::structs::custom_error::CustomError;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::self_signed_pem::SelfSignedPem;
use log::{error, info};
use std::fs;
use std::sync::Arc;

pub fn create_certificate_store() -> Arc<CertificateStore> {
    Arc::new(CertificateStore::empty())
}

pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    Ok(rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

pub fn generate_self_signed(subject_alt_names: Vec<String>) -> Result<SelfSignedPem, rcgen::Error> {
    let key_pair = rcgen::KeyPair::generate()?;
    let cert = rcgen::CertificateParams::new(subject_alt_names)?.self_signed(&key_pair)?;
    Ok(SelfSignedPem {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    })
}

/// Writes a self-signed pair for `localhost` (and `domain`, when different)
/// to the given files. For development only.
pub fn generate_self_signed_files(domain: &str, cert_file: &str, key_file: &str) -> Result<(), CustomError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let pem = generate_self_signed(subject_alt_names).map_err(|e| {
        error!("[CERTGEN] Unable to generate the certificate: {}", e);
        CustomError::new(&e.to_string())
    })?;

    fs::write(key_file, &pem.key_pem).map_err(|e| {
        error!("[CERTGEN] The key file {} could not be generated!", key_file);
        CustomError::new(&e.to_string())
    })?;
    info!("[CERTGEN] The key file {} has been generated", key_file);

    fs::write(cert_file, &pem.cert_pem).map_err(|e| {
        error!("[CERTGEN] The cert file {} could not be generated!", cert_file);
        CustomError::new(&e.to_string())
    })?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);

    info!("[CERTGEN] The files {} and {} have been generated, use them only for development", key_file, cert_file);
    Ok(())
}
