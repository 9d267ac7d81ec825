//! Table configuration.
//!
//! Values are resolved in layers: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags are
//! applied on top by each command. Every value remembers the layer it came from.

use std::fs;

use serde::{Deserialize, Serialize};

use holdem_ai::AI_KINDS;
use holdem_engine::game::{DEFAULT_SMALL_BLIND, GameConfig};

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEATS_ENV: &str = "HOLDEM_SEATS";
pub const BALANCE_ENV: &str = "HOLDEM_BALANCE";
pub const SMALL_BLIND_ENV: &str = "HOLDEM_SMALL_BLIND";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const AI_ENV: &str = "HOLDEM_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seats: usize,
    pub starting_balance: u64,
    pub small_blind: u64,
    pub seed: Option<u64>,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: 4,
            starting_balance: 1_000,
            small_blind: DEFAULT_SMALL_BLIND,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Table setup with optional per-command overrides.
    pub fn game_config(&self, seats: Option<usize>, seed: Option<u64>) -> GameConfig {
        GameConfig {
            seats: seats.unwrap_or(self.seats),
            starting_balance: self.starting_balance,
            small_blind: self.small_blind,
            seed: seed.or(self.seed),
        }
    }
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
    pub seats: ValueSource,
    pub starting_balance: ValueSource,
    pub small_blind: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seats: ValueSource::Default,
            starting_balance: ValueSource::Default,
            small_blind: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read {}: {}", CONFIG_ENV, e),
            ConfigError::Parse(e) => write!(f, "invalid TOML: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seats) = env_value(SEATS_ENV) {
        cfg.seats = parse_env(SEATS_ENV, &seats)?;
        sources.seats = ValueSource::Env;
    }
    if let Some(balance) = env_value(BALANCE_ENV) {
        cfg.starting_balance = parse_env(BALANCE_ENV, &balance)?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(sb) = env_value(SMALL_BLIND_ENV) {
        cfg.small_blind = parse_env(SMALL_BLIND_ENV, &sb)?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(parse_env(SEED_ENV, &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(ai) = env_value(AI_ENV) {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    starting_balance: Option<u64>,
    #[serde(default)]
    small_blind: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, value)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.game_config(None, None)
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if !AI_KINDS.contains(&cfg.ai.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        let game = cfg.game_config(Some(6), Some(3));
        assert_eq!(game.seats, 6);
        assert_eq!(game.seed, Some(3));
        assert_eq!(game.small_blind, 10);
    }

    #[test]
    fn unknown_ai_is_rejected() {
        let cfg = Config {
            ai: "shark".into(),
            ..Config::default()
        };
        let msg = validate(&cfg).unwrap_err().to_string();
        assert!(msg.contains("unknown ai"), "{msg}");
    }

    #[test]
    fn oversized_table_is_rejected() {
        let cfg = Config {
            seats: 30,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("seats = 3\nlevel = 2\n").is_err());
        let f: FileConfig = toml::from_str("seats = 3\nai = \"passive\"\n").unwrap();
        assert_eq!(f.seats, Some(3));
        assert_eq!(f.ai.as_deref(), Some("passive"));
    }
}
