#[cfg(test)]
mod common_tests {
    use crate::common::common::log_level_filter;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter("info"), Some(log::LevelFilter::Info));
        assert_eq!(log_level_filter("off"), Some(log::LevelFilter::Off));
        assert_eq!(log_level_filter("loud"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create the config file");
        assert_eq!(error.to_string(), "could not create the config file");
    }
}
