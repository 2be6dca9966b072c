use holdem_engine::game::{MAX_STARTING_CHIPS, TableConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Settings resolved from defaults, the `HOLDEM_CONFIG` TOML file and
/// `HOLDEM_*` environment variables, in increasing precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub min_raise: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub min_raise: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            min_raise: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_chips: table.starting_chips,
            min_raise: table.min_raise,
            seed: None,
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            starting_chips: self.starting_chips,
            min_raise: self.min_raise,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("HOLDEM_SEED")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(chips) = env_value("HOLDEM_STARTING_CHIPS")? {
        cfg.starting_chips = chips;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(min_raise) = env_value("HOLDEM_MIN_RAISE")? {
        cfg.min_raise = min_raise;
        sources.min_raise = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >0".into(),
        ));
    }
    if cfg.starting_chips > MAX_STARTING_CHIPS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_chips must be <= {}",
            MAX_STARTING_CHIPS
        )));
    }
    if cfg.min_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be >0".into(),
        ));
    }
    if cfg.min_raise > cfg.starting_chips {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must not exceed starting_chips".into(),
        ));
    }
    Ok(())
}
