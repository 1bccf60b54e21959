use std::time::Duration;

use url::Url;

use sfclient_util::settings::{Config, FileFormat, LoadedConfig, LoadError};

pub fn load_with_overrides(overrides: Config) -> Result<LoadedConfig, LoadError> {
    sfclient_util::settings::load_config("client", include_str!("../sfclient.toml"), FileFormat::Toml, overrides)
}

pub fn load_defaults() -> Result<LoadedConfig, LoadError> {
    load_with_overrides(Config::default())
}

/// Connection settings of a [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    /// HTTP gateway of the cluster, e.g. `https://mycluster.westus.cloudapp.azure.com:19080/`.
    pub endpoint: Url,
    pub timeout: Duration,
    pub https_only: bool,
}

impl ClientSettings {
    const ENDPOINT: &'static str = "endpoint";
    const TIMEOUT_SECONDS: &'static str = "request.timeout.seconds";
    const HTTPS_ONLY: &'static str = "https.only";

    pub fn load(config: &Config) -> Result<Self, LoadError> {
        let endpoint = config.get_string(Self::ENDPOINT)
            .map_err(|source| LoadError::ReadField { field: Self::ENDPOINT, source: Box::new(source) })?;
        let endpoint = Url::parse(&endpoint)
            .map_err(|source| LoadError::ParseValue { field: Self::ENDPOINT, value: Clone::clone(&endpoint), source: Box::new(source) })?;

        let timeout = config.get_int(Self::TIMEOUT_SECONDS)
            .map_err(|source| LoadError::ReadField { field: Self::TIMEOUT_SECONDS, source: Box::new(source) })?;
        let timeout = u64::try_from(timeout)
            .map(Duration::from_secs)
            .map_err(|source| LoadError::ParseValue { field: Self::TIMEOUT_SECONDS, value: timeout.to_string(), source: Box::new(source) })?;

        let https_only = config.get_bool(Self::HTTPS_ONLY)
            .map_err(|source| LoadError::ReadField { field: Self::HTTPS_ONLY, source: Box::new(source) })?;

        Ok(Self {
            endpoint,
            timeout,
            https_only,
        })
    }
}


#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use sfclient_util::logging::LoggingConfig;

    use super::*;

    #[test]
    fn should_load_the_default_settings() -> anyhow::Result<()> {
        let settings = ClientSettings::load(&load_defaults()?.config)?;

        assert_that!(settings, eq(ClientSettings {
            endpoint: Url::parse("http://localhost:19080/")?,
            timeout: Duration::from_secs(60),
            https_only: false,
        }));
        Ok(())
    }

    #[test]
    fn should_apply_overrides() -> anyhow::Result<()> {
        let overrides = Config::builder()
            .set_override("endpoint", "https://mycluster.westus.cloudapp.azure.com:19080/")?
            .set_override("https.only", true)?
            .build()?;

        let settings = ClientSettings::load(&load_with_overrides(overrides)?.config)?;

        assert_that!(settings.endpoint.host_str(), some(eq("mycluster.westus.cloudapp.azure.com")));
        assert_that!(settings.https_only, eq(true));
        Ok(())
    }

    #[test]
    fn should_reject_an_unparseable_endpoint() -> anyhow::Result<()> {
        let overrides = Config::builder()
            .set_override("endpoint", "not a url")?
            .build()?;

        let result = ClientSettings::load(&load_with_overrides(overrides)?.config);

        assert!(matches!(result, Err(LoadError::ParseValue { field: "endpoint", .. })));
        Ok(())
    }

    #[test]
    fn should_reject_a_negative_timeout() -> anyhow::Result<()> {
        let overrides = Config::builder()
            .set_override("request.timeout.seconds", -1)?
            .build()?;

        let result = ClientSettings::load(&load_with_overrides(overrides)?.config);

        assert!(matches!(result, Err(LoadError::ParseValue { field: "request.timeout.seconds", .. })));
        Ok(())
    }

    #[test]
    fn should_load_logging_settings_from_the_same_sources() -> anyhow::Result<()> {
        let overrides = Config::builder()
            .set_override("logging.file", "/tmp/sfclient.log")?
            .build()?;

        let logging = LoggingConfig::load(&load_with_overrides(overrides)?.config)?;

        assert_that!(logging, eq(LoggingConfig {
            file: Some(std::path::PathBuf::from("/tmp/sfclient.log")),
            directives: vec![String::from("sfclient_http=debug")],
        }));
        Ok(())
    }
}
