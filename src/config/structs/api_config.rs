use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiConfig {
    pub enabled: bool,
    pub api_key: String,
}
