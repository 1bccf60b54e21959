use std::path::PathBuf;

pub use config::{Config, ConfigError, FileFormat};
use home::home_dir;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("Error while retrieving configured value for '{field}'")]
    ReadField { field: &'static str, #[source] source: Box<ConfigError> },
    #[error("Failed to parse field '{field}' with value '{value}'")]
    ParseValue { field: &'static str, value: String, #[source] source: Box<dyn std::error::Error + Send + Sync> },
}

#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_files_used: Vec<PathBuf>,
    pub config_files_declared: Vec<PathBuf>,
}

/// Load configuration from files and environment variables.
///
/// This includes in following order:
/// * A default configuration, provided as a string
/// * A system configuration, read from `/etc/sfclient/{name}.toml`
/// * A user configuration, read from `[XDG_CONFIG_HOME|~/.config]/sfclient/{name}/config.toml`
/// * The file given in the optional environment variable `SFCLIENT_{NAME}_CUSTOM_CONFIG_PATH`
/// * Environment variables prefixed with `SFCLIENT_{NAME}_`
/// * The `overrides` passed as parameter.
///
pub fn load_config(name: &str, defaults: &str, defaults_format: FileFormat, overrides: Config) -> Result<LoadedConfig, LoadError> {

    let system_config = format!("/etc/sfclient/{name}.toml");
    let user_config = format!("sfclient/{name}/config.toml");

    let builder = Config::builder()
        .add_source(config::File::from_str(defaults, defaults_format));

    let mut config_files = Vec::new();

    config_files.push(Some(PathBuf::from(system_config)));

    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg_config_home) => {
            config_files.push(Some(PathBuf::from(xdg_config_home).join(user_config)));
        }
        Err(_) => {
            config_files.push(home_dir().map(|path| path.join(".config").join(user_config)));
        }
    }

    let env_prefix = format!("SFCLIENT_{}", name.to_uppercase().replace('-', "_"));

    if let Ok(config_path) = std::env::var(format!("{env_prefix}_CUSTOM_CONFIG_PATH")) {
        config_files.push(Some(PathBuf::from(config_path)));
    }

    let (sources_used, sources_declared): (Vec<PathBuf>, Vec<PathBuf>) = config_files.into_iter()
        .fold((Vec::new(), Vec::new()), |(mut used, mut declared), path| {
            if let Some(path) = path {
                declared.push(Clone::clone(&path));
                if path.is_file() {
                    used.push(path);
                }
            }
            (used, declared)
        });

    let builder = sources_used.iter()
        .cloned()
        .fold(builder, |builder, path| {
            builder.add_source(config::File::from(path).required(false))
        });

    let builder = builder.add_source(
        config::Environment::with_prefix(&env_prefix)
            .separator("_")
            .try_parsing(true)
    );

    let config = builder
        .add_source(overrides)
        .build()?;

    Ok(LoadedConfig {
        config,
        config_files_used: sources_used,
        config_files_declared: sources_declared,
    })
}
