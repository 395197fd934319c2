use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReloadConfig {
    pub interval: u64,
    pub watch: bool,
    pub watch_interval: u64,
    pub signal: bool,
}
