//! # betfair-rest
//!
//! Typed request builders and an async client for the Betfair Exchange REST
//! API. Requests are assembled from option bags, posted to the betting or
//! account endpoint, and the decoded JSON response is handed back as-is.
//!
//! ## Quick Start
//!
//! ```no_run
//! use betfair_rest::dto::{BookOptions, MarketFilter, PriceData, PriceProjection};
//! use betfair_rest::{BettingManager, CertLogin, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Load configuration from config.toml
//! let config = Config::new()?;
//!
//! // Log in with the client certificate and build the manager
//! let betting = BettingManager::connect(&config, &CertLogin::new()).await?;
//!
//! // List available event types (e.g., Soccer, Tennis, Horse Racing)
//! let event_types = betting.list_event_types(MarketFilter::default()).await?;
//!
//! // Best prices for a market
//! let options = BookOptions {
//!     price_projection: Some(PriceProjection::new(vec![PriceData::ExBestOffers])),
//!     ..Default::default()
//! };
//! let book = betting
//!     .list_market_book(vec!["1.240634817".to_string()], Some(options))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your Betfair credentials:
//!
//! ```toml
//! [betfair]
//! api_key = "your_api_key"
//! username = "your_username"
//! password = "your_password"
//! cert_path = "/path/to/client-2048.crt"
//! key_path = "/path/to/client-2048.key"
//! domain = "com"
//! ```
//!
//! Setting `session_token` instead of the login fields skips certificate
//! login. `BETFAIR_API_KEY`, `BETFAIR_SESSION_TOKEN` and `BETFAIR_DOMAIN`
//! override the file when it is loaded with `Config::new` or `Config::load`;
//! `Config::from_file` ignores the environment.
//!
//! ## Errors
//!
//! Transport failures propagate and nothing is retried. A non-2xx response
//! is not an error: its body is decoded and returned like any other, since
//! it usually carries the API's own error description.

pub mod accounts;
pub mod auth;
pub mod betting;
pub mod config;
pub mod dispatcher;
pub mod dto;
pub mod endpoint;
pub mod error;
pub mod manager;
pub mod session;

// Re-export commonly used types at the crate root
pub use accounts::AccountsManager;
pub use auth::{Authenticator, CertLogin, Credentials, StaticToken};
pub use betting::BettingManager;
pub use config::{BetfairConfig, Config, Domain};
pub use dispatcher::{ApiResponse, Dispatcher};
pub use error::{AuthError, ConfigError};
pub use manager::Manager;
pub use session::Session;
