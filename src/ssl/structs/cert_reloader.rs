use crate::ssl::enums::reloader_state::ReloaderState;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::reload_failure::ReloadFailure;
use crate::ssl::traits::certificate_source::CertificateSource;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Loads certificate pairs from a [`CertificateSource`] and installs them into
/// a [`CertificateStore`].
///
/// `reload_lock` serializes read-parse-install sequences. Handshakes never take
/// it; they only read the store. `pending_read` holds the reader thread of a
/// deadline-bounded reload until it finishes, so at most one is alive.
pub struct CertReloader {
    pub(crate) source: Arc<dyn CertificateSource>,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) reload_lock: Mutex<()>,
    pub(crate) read_timeout: Option<Duration>,
    pub(crate) pending_read: Mutex<Option<JoinHandle<()>>>,
    pub(crate) state: RwLock<ReloaderState>,
    pub(crate) last_failure: RwLock<Option<ReloadFailure>>,
}
