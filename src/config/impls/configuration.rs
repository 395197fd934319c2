use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tls_config::TlsConfig;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use std::time::Duration;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            http_server: HttpServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:8443"),
                threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
            },
            tls: TlsConfig {
                cert_path: String::from("cert.pem"),
                key_path: String::from("key.pem"),
                reload_timeout: 10,
            },
            reload: ReloadConfig {
                interval: 0,
                watch: true,
                watch_interval: 5,
                signal: true,
            },
            api: ApiConfig {
                enabled: true,
                api_key: String::from("MyApiKey"),
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create the config file automatically"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new("created the config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create the config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::Invalid(format!("unknown log level '{}'", self.log_level)));
        }
        if self.tls.cert_path.is_empty() != self.tls.key_path.is_empty() {
            return Err(ConfigurationError::Invalid(String::from("tls.cert_path and tls.key_path must both be set, or both be empty for plain HTTP")));
        }
        if self.http_server.enabled {
            if self.http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::Invalid(format!("bind address '{}' is not a socket address", self.http_server.bind_address)));
            }
            if self.http_server.threads == 0 {
                return Err(ConfigurationError::Invalid(String::from("http_server.threads must be at least 1")));
            }
        }
        if self.reload.watch && self.reload.watch_interval == 0 {
            return Err(ConfigurationError::Invalid(String::from("reload.watch_interval must be at least 1 when watching")));
        }
        Ok(())
    }

    /// TLS is on when both certificate and key paths are configured.
    pub fn tls_enabled(&self) -> bool {
        !self.tls.cert_path.is_empty() && !self.tls.key_path.is_empty()
    }

    pub fn reload_timeout(&self) -> Option<Duration> {
        match self.tls.reload_timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }
}
