#![allow(dead_code)]
use hotcert::config::structs::configuration::Configuration;
use hotcert::ssl::enums::certificate_error::CertificateError;
use hotcert::ssl::ssl::generate_self_signed;
use hotcert::ssl::structs::certificate_paths::CertificatePaths;
use hotcert::ssl::structs::file_certificate_source::FileCertificateSource;
use hotcert::ssl::structs::self_signed_pem::SelfSignedPem;
use hotcert::ssl::traits::certificate_source::CertificateSource;
use parking_lot::{Condvar, Mutex};
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, ClientConnection, RootCertStore, ServerConfig, ServerConnection};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.api.api_key = "TestApiKey".to_string();
    config.http_server.threads = 1;
    Arc::new(config)
}

pub fn self_signed() -> SelfSignedPem {
    generate_self_signed(vec!["localhost".to_string()]).unwrap()
}

/// A temporary directory holding `cert.pem` and `key.pem`.
pub struct CertificateDir {
    pub dir: TempDir,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl CertificateDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cert_path = dir.path().join("cert.pem");
        let key_path = dir.path().join("key.pem");
        Self { dir, cert_path, key_path }
    }

    pub fn with_pair(pem: &SelfSignedPem) -> Self {
        let certificate_dir = Self::new();
        certificate_dir.write_pair(pem);
        certificate_dir
    }

    pub fn write_pair(&self, pem: &SelfSignedPem) {
        self.write_cert(&pem.cert_pem);
        self.write_key(&pem.key_pem);
    }

    pub fn write_cert(&self, content: &str) {
        std::fs::write(&self.cert_path, content).unwrap();
    }

    pub fn write_key(&self, content: &str) {
        std::fs::write(&self.key_path, content).unwrap();
    }

    pub fn cert_path(&self) -> String {
        self.cert_path.to_string_lossy().to_string()
    }

    pub fn key_path(&self) -> String {
        self.key_path.to_string_lossy().to_string()
    }

    pub fn paths(&self) -> CertificatePaths {
        CertificatePaths {
            cert_path: self.cert_path(),
            key_path: self.key_path(),
        }
    }
}

/// File source that counts reads and can hold a read open until released.
pub struct GatedSource {
    inner: FileCertificateSource,
    pub reads: AtomicUsize,
    gate: Mutex<bool>,
    gate_changed: Condvar,
    entered: Mutex<bool>,
    entered_changed: Condvar,
}

impl GatedSource {
    pub fn new(paths: CertificatePaths) -> Self {
        Self {
            inner: FileCertificateSource::from(paths),
            reads: AtomicUsize::new(0),
            gate: Mutex::new(true),
            gate_changed: Condvar::new(),
            entered: Mutex::new(false),
            entered_changed: Condvar::new(),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn close_gate(&self) {
        *self.gate.lock() = false;
        *self.entered.lock() = false;
    }

    pub fn open_gate(&self) {
        *self.gate.lock() = true;
        self.gate_changed.notify_all();
    }

    /// Blocks until a read is waiting at the closed gate.
    pub fn wait_until_blocked(&self) {
        let mut entered = self.entered.lock();
        while !*entered {
            self.entered_changed.wait(&mut entered);
        }
    }
}

impl CertificateSource for GatedSource {
    fn read_certificate(&self) -> Result<Vec<u8>, CertificateError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        {
            *self.entered.lock() = true;
            self.entered_changed.notify_all();
        }
        let mut open = self.gate.lock();
        while !*open {
            self.gate_changed.wait(&mut open);
        }
        drop(open);
        self.inner.read_certificate()
    }

    fn read_key(&self) -> Result<Vec<u8>, CertificateError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_key()
    }

    fn paths(&self) -> CertificatePaths {
        self.inner.paths()
    }
}

/// Runs a full in-memory handshake against `server_config`, trusting only
/// `trusted_cert_pem`. Returns the chain the server presented.
pub fn handshake(
    server_config: Arc<ServerConfig>,
    trusted_cert_pem: &str,
) -> Result<Vec<CertificateDer<'static>>, rustls::Error> {
    let mut roots = RootCertStore::empty();
    for cert in rustls_pemfile::certs(&mut trusted_cert_pem.as_bytes()) {
        roots.add(cert.unwrap())?;
    }
    let client_config = ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots)
        .with_no_client_auth();
    let server_name = ServerName::try_from("localhost".to_string()).unwrap();
    let mut client = ClientConnection::new(Arc::new(client_config), server_name)?;
    let mut server = ServerConnection::new(server_config)?;

    for _ in 0..16 {
        let mut buffer = Vec::new();
        while client.wants_write() {
            client.write_tls(&mut buffer).unwrap();
        }
        let mut pending = &buffer[..];
        while !pending.is_empty() {
            server.read_tls(&mut pending).unwrap();
            server.process_new_packets()?;
        }

        let mut buffer = Vec::new();
        while server.wants_write() {
            server.write_tls(&mut buffer).unwrap();
        }
        let mut pending = &buffer[..];
        while !pending.is_empty() {
            client.read_tls(&mut pending).unwrap();
            client.process_new_packets()?;
        }

        if !client.is_handshaking() && !server.is_handshaking() {
            break;
        }
    }

    Ok(client
        .peer_certificates()
        .map(|certs| certs.to_vec())
        .unwrap_or_default())
}

/// DER of the first certificate in `cert_pem`.
pub fn leaf_der(cert_pem: &str) -> CertificateDer<'static> {
    rustls_pemfile::certs(&mut cert_pem.as_bytes())
        .next()
        .unwrap()
        .unwrap()
}
