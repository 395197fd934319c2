use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::reloader_state::ReloaderState;
use crate::ssl::ssl::create_certificate_store;
use crate::ssl::structs::cert_reloader::CertReloader;
use crate::ssl::structs::certificate_pair::CertificatePair;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::structs::installed_pair::InstalledPair;
use crate::ssl::structs::reload_failure::ReloadFailure;
use crate::ssl::traits::certificate_source::CertificateSource;
use crate::ssl::types::GetCertificateFn;
use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::mpsc::{RecvTimeoutError, sync_channel};
use std::time::Duration;

impl std::fmt::Debug for CertReloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertReloader")
            .field("paths", &self.source.paths())
            .field("state", &*self.state.read())
            .field("read_timeout", &self.read_timeout)
            .field("store", &self.store)
            .finish()
    }
}

impl CertReloader {
    /// Loads the pair at `cert_path`/`key_path` and returns a reloader serving it.
    ///
    /// Fails when the initial load fails; no reloader exists in that case.
    pub fn new(cert_path: impl Into<String>, key_path: impl Into<String>) -> Result<Self, CertificateError> {
        Self::with_source(
            Arc::new(FileCertificateSource::new(cert_path, key_path)),
            create_certificate_store(),
        )
    }

    /// Same as [`CertReloader::new`], reading through `source` and installing
    /// into the given `store`.
    pub fn with_source(
        source: Arc<dyn CertificateSource>,
        store: Arc<CertificateStore>,
    ) -> Result<Self, CertificateError> {
        let reloader = Self {
            source,
            store,
            reload_lock: Mutex::new(()),
            read_timeout: None,
            pending_read: Mutex::new(None),
            state: RwLock::new(ReloaderState::Uninitialized),
            last_failure: RwLock::new(None),
        };
        reloader.load_and_install("load", None)?;
        Ok(reloader)
    }

    /// Bounds the file-read step of reloads issued through
    /// [`crate::reload::traits::reloadable::Reloadable`].
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Re-reads both files and installs the new pair. On failure the
    /// current pair stays in place and the error is returned.
    pub fn reload(&self) -> Result<Arc<CertificatePair>, CertificateError> {
        self.reload_installed(None).map(|installed| installed.pair)
    }

    /// Like [`CertReloader::reload`], failing with
    /// [`CertificateError::Timeout`] if reading does not finish within `timeout`.
    ///
    /// A read that timed out keeps running in the background; until it ends,
    /// further deadline-bounded reloads fail with `Timeout` without reading.
    pub fn reload_with_deadline(&self, timeout: Duration) -> Result<Arc<CertificatePair>, CertificateError> {
        self.reload_installed(Some(timeout)).map(|installed| installed.pair)
    }

    /// Reloads and returns the installed pair with the store generation it
    /// was installed as.
    pub fn reload_installed(&self, deadline: Option<Duration>) -> Result<InstalledPair, CertificateError> {
        self.load_and_install("reload", deadline)
    }

    /// Returns the accessor the TLS stack calls once per handshake.
    pub fn get_certificate_func(&self) -> GetCertificateFn {
        let store = Arc::clone(&self.store);
        Arc::new(move |_info: &HandshakeInfo| store.current().ok_or(CertificateError::NoCertificate))
    }

    pub fn resolver(&self) -> Arc<DynamicCertificateResolver> {
        Arc::new(DynamicCertificateResolver::new(self.get_certificate_func()))
    }

    pub fn store(&self) -> Arc<CertificateStore> {
        Arc::clone(&self.store)
    }

    pub fn paths(&self) -> CertificatePaths {
        self.source.paths()
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    pub fn state(&self) -> ReloaderState {
        *self.state.read()
    }

    pub fn last_failure(&self) -> Option<ReloadFailure> {
        self.last_failure.read().clone()
    }

    fn load_and_install(
        &self,
        attempt: &'static str,
        deadline: Option<Duration>,
    ) -> Result<InstalledPair, CertificateError> {
        let _guard = self.reload_lock.lock();
        let paths = self.source.paths();

        let result = self.read_source(deadline).and_then(|(cert_pem, key_pem)| {
            CertificatePair::from_pem(&cert_pem, &key_pem, &paths)
        });

        match result {
            Ok(pair) => {
                let pair = Arc::new(pair);
                let (previous, generation) = self.store.install(Arc::clone(&pair));
                *self.state.write() = ReloaderState::Loaded;
                *self.last_failure.write() = None;
                info!(
                    "[CERTIFICATE] {} outcome=success cert_path={} key_path={} generation={} loaded_at={} not_after={} subject=\"{}\" fingerprint={} previous_fingerprint={}",
                    attempt,
                    paths.cert_path,
                    paths.key_path,
                    generation,
                    pair.loaded_at().to_rfc3339(),
                    pair.not_after().map(|t| t.to_rfc3339()).unwrap_or_else(|| "unknown".to_string()),
                    pair.subject().unwrap_or("unknown"),
                    pair.fingerprint(),
                    previous.as_ref().map(|p| p.fingerprint()).unwrap_or("none")
                );
                Ok(InstalledPair { pair, generation })
            }
            Err(e) => {
                {
                    let mut state = self.state.write();
                    if *state == ReloaderState::Uninitialized {
                        *state = ReloaderState::Failed;
                    }
                }
                *self.last_failure.write() = Some(ReloadFailure {
                    kind: e.kind(),
                    message: e.to_string(),
                    failed_at: chrono::Utc::now(),
                });
                warn!(
                    "[CERTIFICATE] {} outcome=failure cert_path={} key_path={} kind={} error=\"{}\"",
                    attempt,
                    paths.cert_path,
                    paths.key_path,
                    e.kind(),
                    e
                );
                Err(e)
            }
        }
    }

    fn read_source(&self, deadline: Option<Duration>) -> Result<(Vec<u8>, Vec<u8>), CertificateError> {
        let Some(timeout) = deadline else {
            return read_both(self.source.as_ref());
        };

        let mut pending = self.pending_read.lock();
        match pending.take() {
            Some(reader) if !reader.is_finished() => {
                *pending = Some(reader);
                return Err(CertificateError::Timeout { timeout });
            }
            Some(reader) => {
                let _ = reader.join();
            }
            None => {}
        }

        let source = Arc::clone(&self.source);
        let (tx, rx) = sync_channel(1);
        let reader = std::thread::Builder::new()
            .name("cert-read".to_string())
            .spawn(move || {
                let _ = tx.send(read_both(source.as_ref()));
            })
            .map_err(|e| CertificateError::FileRead {
                path: self.source.paths().cert_path,
                source: e,
            })?;
        *pending = Some(reader);
        drop(pending);

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(CertificateError::Timeout { timeout }),
            Err(RecvTimeoutError::Disconnected) => Err(CertificateError::FileRead {
                path: self.source.paths().cert_path,
                source: std::io::Error::other("certificate reader exited without a result"),
            }),
        }
    }
}

fn read_both(source: &dyn CertificateSource) -> Result<(Vec<u8>, Vec<u8>), CertificateError> {
    let cert_pem = source.read_certificate()?;
    let key_pem = source.read_key()?;
    Ok((cert_pem, key_pem))
}
