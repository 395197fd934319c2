use crate::reload::structs::watch_state::WatchState;
use crate::reload::structs::watched_files::WatchedFiles;

impl WatchState {
    pub fn new(loaded: WatchedFiles) -> Self {
        Self { loaded, reported: None }
    }

    pub fn is_changed(&self, current: &WatchedFiles) -> bool {
        &self.loaded != current
    }

    pub fn mark_loaded(&mut self, current: WatchedFiles) {
        self.loaded = current;
        self.reported = None;
    }

    /// Records a failed reload of `current`. Returns `true` only the first
    /// time a given snapshot fails.
    pub fn mark_failed(&mut self, current: &WatchedFiles) -> bool {
        if self.reported.as_ref() == Some(current) {
            return false;
        }
        self.reported = Some(current.clone());
        true
    }
}
