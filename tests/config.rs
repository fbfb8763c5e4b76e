#[cfg(test)]
mod tests {
    use paydesk::libs::config::{Config, PayrollConfig, ServerConfig, API_URL_ENV, CONFIG_FILE_NAME, DEFAULT_API_URL};
    use paydesk::libs::data_storage::DataStorage;
    use paydesk::libs::period::PeriodType;
    use paydesk::libs::proration::PayFrequency;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file share HOME and `PAYDESK_API_URL`.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary directory.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }

        fn teardown(self) {
            std::env::remove_var(API_URL_ENV);
        }
    }

    fn sample_config() -> Config {
        Config {
            server: Some(ServerConfig {
                api_url: "https://payroll.example.com/api/".to_string(),
            }),
            payroll: Some(PayrollConfig {
                default_period: PeriodType::Biweekly,
                default_frequency: PayFrequency::SemiMonthly,
                currency: "USD".to_string(),
            }),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server, None);
        assert_eq!(config.payroll, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = sample_config();
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"payroll": {"default_frequency": "weekly"}}"#).unwrap();

        let config = Config::read().unwrap();
        let payroll = config.payroll();

        assert_eq!(config.server, None);
        assert_eq!(payroll.default_frequency, PayFrequency::Weekly);
        assert_eq!(payroll.default_period, PeriodType::Monthly);
        assert_eq!(payroll.currency, "PHP");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        sample_config().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());

        Config::delete().unwrap();
        assert!(!path.exists());
        assert_eq!(Config::read().unwrap(), Config::default());

        // Deleting twice is fine.
        Config::delete().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_url_precedence(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::default().api_url(), DEFAULT_API_URL);

        let config = sample_config();
        assert_eq!(config.api_url(), "https://payroll.example.com/api/");

        let no_slash = Config {
            server: Some(ServerConfig {
                api_url: "http://10.0.0.5:8000/api".to_string(),
            }),
            payroll: None,
        };
        assert_eq!(no_slash.api_url(), "http://10.0.0.5:8000/api/");

        std::env::set_var(API_URL_ENV, "http://override:9000/api");
        assert_eq!(config.api_url(), "http://override:9000/api/");

        std::env::set_var(API_URL_ENV, "  ");
        assert_eq!(config.api_url(), "https://payroll.example.com/api/");
    }
}
