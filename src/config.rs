use crate::auth::Credentials;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Regional exchange the client talks to.
///
/// The value is substituted into every API root and into the login URL,
/// e.g. `https://api.betfair.es/...` for the Spanish exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Com,
    Es,
    It,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Com => "com",
            Domain::Es => "es",
            Domain::It => "it",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "com" => Ok(Domain::Com),
            "es" => Ok(Domain::Es),
            "it" => Ok(Domain::It),
            other => Err(ConfigError::InvalidValue {
                field: "domain",
                reason: format!("expected one of com, es, it; got {other:?}"),
            }),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct BetfairConfig {
    pub api_key: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub cert_path: Option<String>,
    #[serde(default)]
    pub key_path: Option<String>,
    #[serde(default)]
    pub domain: Domain,
    /// Pre-issued session token. When present, certificate login is skipped.
    #[serde(default)]
    pub session_token: Option<String>,
    /// Pretty-print every response body at INFO level.
    #[serde(default)]
    pub log_responses: bool,
}

// Secrets stay out of logs.
impl fmt::Debug for BetfairConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BetfairConfig")
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("domain", &self.domain)
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .field("log_responses", &self.log_responses)
            .finish()
    }
}

impl BetfairConfig {
    /// Check that the configuration can produce an authenticated session.
    ///
    /// An application key is always required. Without a pre-issued session
    /// token the login credentials and both certificate paths must be set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_key" });
        }
        if let Some(token) = &self.session_token {
            if token.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "session_token",
                    reason: "must not be empty".to_string(),
                });
            }
            return Ok(());
        }
        self.credentials().map(|_| ())
    }

    /// Credentials for certificate login.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            username: required(&self.username, "username")?,
            password: required(&self.password, "password")?,
            api_key: self.api_key.clone(),
            cert_path: PathBuf::from(required(&self.cert_path, "cert_path")?),
            key_path: PathBuf::from(required(&self.key_path, "key_path")?),
            domain: self.domain,
        })
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(ConfigError::MissingField { field }),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub betfair: BetfairConfig,
}

impl Config {
    /// Load `config.toml` from the working directory, apply `BETFAIR_*`
    /// environment overrides (including those from a `.env` file) and
    /// validate the result.
    pub fn new() -> anyhow::Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Like [`Config::new`] but reading `path`.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Read `path`, apply overrides from `lookup` and validate.
    pub fn load_with<F>(path: impl AsRef<Path>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read(path)?;
        config.apply_overrides(lookup)?;
        config.betfair.validate()?;
        info!("Config: {:?}", config);
        Ok(config)
    }

    /// Load and validate a config file without consulting the environment.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Self::read(path)?;
        config.betfair.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_str(&contents)
    }

    /// Override file values with `BETFAIR_API_KEY`, `BETFAIR_SESSION_TOKEN`
    /// and `BETFAIR_DOMAIN` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("BETFAIR_API_KEY") {
            self.betfair.api_key = api_key;
        }
        if let Some(token) = lookup("BETFAIR_SESSION_TOKEN") {
            self.betfair.session_token = Some(token);
        }
        if let Some(domain) = lookup("BETFAIR_DOMAIN") {
            self.betfair.domain = domain.parse()?;
        }
        Ok(())
    }
}
