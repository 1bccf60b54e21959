use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the base filter, e.g. `SFCLIENT_LOG=sfclient_http=trace`.
pub const LOG_ENV_VAR: &str = "SFCLIENT_LOG";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read log filter from 'SFCLIENT_LOG':\n  {source}")]
    FilterFromEnv { #[from] source: tracing_subscriber::filter::FromEnvError },
    #[error("Could not parse log directive '{directive}':\n  {source}")]
    InvalidDirective { directive: String, #[source] source: tracing_subscriber::filter::ParseError },
    #[error("Could not create log file at '{path}':\n  {source}")]
    LogFile { path: PathBuf, #[source] source: std::io::Error },
    #[error("Could not install the log subscriber:\n  {source}")]
    SubscriberInit { #[from] source: tracing_subscriber::util::TryInitError },
}

/// Where and how much the client crates log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Plain-text copy of the log, without ANSI colors.
    pub file: Option<PathBuf>,
    /// Added on top of the filter from [`LOG_ENV_VAR`], so they win for the targets they name.
    pub directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            directives: vec![String::from("sfclient_http=debug")],
        }
    }
}

#[cfg(feature = "settings")]
impl LoggingConfig {
    const FILE: &'static str = "logging.file";
    const DIRECTIVES: &'static str = "logging.directives";

    /// Reads the `[logging]` table. Absent keys keep their default.
    pub fn load(config: &crate::settings::Config) -> Result<Self, crate::settings::LoadError> {
        use crate::settings::{ConfigError, LoadError};

        let mut logging = Self::default();

        match config.get_string(Self::FILE) {
            Ok(file) => logging.file = Some(PathBuf::from(file)),
            Err(ConfigError::NotFound(_)) => {}
            Err(source) => return Err(LoadError::ReadField { field: Self::FILE, source: Box::new(source) }),
        }

        match config.get_array(Self::DIRECTIVES) {
            Ok(directives) => {
                logging.directives = directives.into_iter()
                    .map(|directive| directive.into_string())
                    .collect::<Result<_, _>>()
                    .map_err(|source| LoadError::ReadField { field: Self::DIRECTIVES, source: Box::new(source) })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(source) => return Err(LoadError::ReadField { field: Self::DIRECTIVES, source: Box::new(source) }),
        }

        Ok(logging)
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn initialize() -> Result<(), Error> {
    initialize_with_config(LoggingConfig::default())
}

pub fn initialize_with_config(config: LoggingConfig) -> Result<(), Error> {

    let filter = filter(&config.directives)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .compact();

    let file_layer = match config.file {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|source| Error::LogFile { path, source })?;

            Some(tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn filter(directives: &[String]) -> Result<EnvFilter, Error> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env()?;

    for directive in directives {
        let parsed = Directive::from_str(directive)
            .map_err(|source| Error::InvalidDirective { directive: Clone::clone(directive), source })?;
        filter = filter.add_directive(parsed);
    }

    Ok(filter)
}
