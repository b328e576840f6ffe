use thiserror::Error;

/// Problems found while loading or validating configuration.
///
/// Raised before any request is sent, so a misconfigured manager never
/// reaches the network.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the certificate login endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("login rejected with status {0}")]
    LoginRejected(String),

    #[error("login succeeded but no session token was returned")]
    MissingToken,
}
