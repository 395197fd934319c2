use crate::reload::structs::watched_files::WatchedFiles;

/// What the watch trigger remembers between polls.
#[derive(Debug, Clone)]
pub struct WatchState {
    /// Snapshot of the files behind the pair currently served.
    pub loaded: WatchedFiles,
    /// Snapshot whose failed reload was already reported.
    pub reported: Option<WatchedFiles>,
}
