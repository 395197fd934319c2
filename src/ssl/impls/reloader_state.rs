use crate::ssl::enums::reloader_state::ReloaderState;

impl std::fmt::Display for ReloaderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReloaderState::Uninitialized => write!(f, "uninitialized"),
            ReloaderState::Loaded => write!(f, "loaded"),
            ReloaderState::Failed => write!(f, "failed"),
        }
    }
}
