#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;
    use std::time::Duration;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.reload_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_default_configuration_toml_round_trip() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(loaded.tls.cert_path, config.tls.cert_path);
        assert_eq!(loaded.http_server.bind_address, config.http_server.bind_address);
        assert_eq!(loaded.reload.watch_interval, config.reload.watch_interval);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut config = Configuration::init();
        config.log_level = String::from("verbose");
        assert!(matches!(config.validate(), Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn test_half_configured_tls_is_rejected() {
        let mut config = Configuration::init();
        config.tls.key_path = String::new();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("tls.cert_path"));
        assert!(!config.tls_enabled());
    }

    #[test]
    fn test_empty_tls_paths_select_plain_http() {
        let mut config = Configuration::init();
        assert!(config.tls_enabled());
        config.tls.cert_path = String::new();
        config.tls.key_path = String::new();
        assert!(config.validate().is_ok());
        assert!(!config.tls_enabled());
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        let mut config = Configuration::init();
        config.http_server.bind_address = String::from("localhost");
        assert!(config.validate().is_err());
        config.http_server.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_watch_interval_is_rejected() {
        let mut config = Configuration::init();
        config.reload.watch_interval = 0;
        assert!(config.validate().is_err());
        config.reload.watch = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_reload_timeout_disables_deadline() {
        let mut config = Configuration::init();
        config.tls.reload_timeout = 0;
        assert_eq!(config.reload_timeout(), None);
    }
}
