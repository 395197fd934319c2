use chrono::{DateTime, Utc};
use serde::Serialize;

/// The most recent failed load attempt of a reloader.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadFailure {
    pub kind: &'static str,
    pub message: String,
    pub failed_at: DateTime<Utc>,
}
