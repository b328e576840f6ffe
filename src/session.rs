use crate::auth::Authenticator;
use crate::config::{BetfairConfig, Domain};
use crate::error::ConfigError;
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::info;

/// Authenticated context shared by every call a manager makes.
#[derive(Clone)]
pub struct Session {
    pub app_key: String,
    pub session_token: String,
    pub domain: Domain,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(app_key: impl Into<String>, session_token: impl Into<String>, domain: Domain) -> Self {
        Self {
            app_key: app_key.into(),
            session_token: session_token.into(),
            domain,
        }
    }

    /// Validate `config` and produce a session, logging in through
    /// `authenticator` unless the config already carries a token.
    pub async fn establish(config: &BetfairConfig, authenticator: &dyn Authenticator) -> Result<Self> {
        config.validate()?;
        let session_token = match &config.session_token {
            Some(token) => token.clone(),
            None => {
                let token = authenticator
                    .obtain_session_token(&config.credentials()?)
                    .await?;
                info!("Obtained session token for {} exchange", config.domain);
                token
            }
        };
        Ok(Self::new(config.api_key.clone(), session_token, config.domain))
    }

    /// Headers sent with every API request.
    pub fn headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::with_capacity(4);
        headers.insert("X-Application", header_value(&self.app_key, "api_key")?);
        let mut token = header_value(&self.session_token, "session_token")?;
        token.set_sensitive(true);
        headers.insert("X-Authentication", token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

fn header_value(value: &str, field: &'static str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}
