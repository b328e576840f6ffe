use crate::config::Domain;
use crate::error::AuthError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Identity};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};

const CERT_LOGIN_URL: &str = "https://identitysso-cert.betfair.{domain}/api/certlogin";

/// Everything certificate login needs.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub api_key: String,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub domain: Domain,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// Source of session tokens.
///
/// Managers only ever see the token; how it was obtained is up to the
/// implementation.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn obtain_session_token(&self, credentials: &Credentials) -> Result<String>;
}

/// Returns a token issued elsewhere, e.g. restored from a previous run.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl Authenticator for StaticToken {
    async fn obtain_session_token(&self, _credentials: &Credentials) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Non-interactive login with a client certificate.
#[derive(Debug, Clone)]
pub struct CertLogin {
    url_template: String,
}

impl Default for CertLogin {
    fn default() -> Self {
        Self::new()
    }
}

impl CertLogin {
    pub fn new() -> Self {
        Self {
            url_template: CERT_LOGIN_URL.to_string(),
        }
    }

    /// Use a different login endpoint. `{domain}` in the template is
    /// replaced with the credentials' domain.
    pub fn with_url_template(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    pub fn login_url(&self, domain: Domain) -> String {
        self.url_template.replace("{domain}", domain.as_str())
    }

    fn identity(credentials: &Credentials) -> Result<Identity> {
        let mut pem = std::fs::read(&credentials.cert_path).with_context(|| {
            format!("reading certificate {}", credentials.cert_path.display())
        })?;
        let key = std::fs::read(&credentials.key_path).with_context(|| {
            format!("reading certificate key {}", credentials.key_path.display())
        })?;
        pem.push(b'\n');
        pem.extend_from_slice(&key);
        Ok(Identity::from_pem(&pem)?)
    }
}

#[async_trait]
impl Authenticator for CertLogin {
    async fn obtain_session_token(&self, credentials: &Credentials) -> Result<String> {
        let identity = Self::identity(credentials)?;
        let client = Client::builder().identity(identity).build()?;
        let url = self.login_url(credentials.domain);
        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];

        info!("Logging in to {}", url);
        let body = client
            .post(&url)
            .header("X-Application", &credentials.api_key)
            .form(&form)
            .send()
            .await?
            .text()
            .await?;
        debug!("Login response: {}", body);

        let response: CertLoginResponse = serde_json::from_str(&body)?;
        Ok(response.into_token()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertLoginResponse {
    #[serde(default)]
    pub session_token: Option<String>,
    pub login_status: String,
}

impl CertLoginResponse {
    pub fn into_token(self) -> Result<String, AuthError> {
        if self.login_status != "SUCCESS" {
            return Err(AuthError::LoginRejected(self.login_status));
        }
        self.session_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
