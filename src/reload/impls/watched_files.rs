use crate::reload::structs::watched_files::WatchedFiles;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use std::time::SystemTime;

impl WatchedFiles {
    pub async fn snapshot(paths: &CertificatePaths) -> Self {
        Self {
            cert_modified: modified(&paths.cert_path).await,
            key_modified: modified(&paths.key_path).await,
        }
    }
}

async fn modified(path: &str) -> Option<SystemTime> {
    tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|metadata| metadata.modified().ok())
}
