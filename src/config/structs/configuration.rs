use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tls_config::TlsConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub http_server: HttpServerConfig,
    pub tls: TlsConfig,
    pub reload: ReloadConfig,
    pub api: ApiConfig,
    pub sentry_config: SentryConfig,
}
