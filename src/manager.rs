use crate::auth::Authenticator;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::endpoint::{ApiArea, Endpoint};
use crate::session::Session;
use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Common construction and dispatch for the per-area managers.
///
/// Implementors name the API area they serve; the root URL is derived from
/// it and the session's domain.
#[async_trait]
pub trait Manager: Sized + Send + Sync {
    const AREA: ApiArea;

    fn from_dispatcher(dispatcher: Dispatcher) -> Self;

    fn dispatcher(&self) -> &Dispatcher;

    fn new(session: &Session, log_responses: bool) -> Result<Self> {
        Self::with_root(Self::AREA.root(session.domain), session, log_responses)
    }

    /// Point the manager at a different root, e.g. a local test server.
    fn with_root(root: impl Into<String>, session: &Session, log_responses: bool) -> Result<Self> {
        Ok(Self::from_dispatcher(Dispatcher::new(
            root,
            session,
            log_responses,
        )?))
    }

    /// Send `body` to `endpoint` and decode whatever comes back as JSON.
    ///
    /// Fails without sending anything if `endpoint` belongs to another area.
    async fn call<B>(&self, endpoint: &Endpoint, body: &B) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        if endpoint.area != Self::AREA {
            bail!(
                "{} is a {:?} operation, not {:?}",
                endpoint.path,
                endpoint.area,
                Self::AREA
            );
        }
        self.dispatcher().call(endpoint, body).await
    }
}

/// Validate `config`, obtain a session and build a manager around it.
pub async fn connect<M: Manager>(config: &Config, authenticator: &dyn Authenticator) -> Result<M> {
    let session = Session::establish(&config.betfair, authenticator).await?;
    M::new(&session, config.betfair.log_responses)
}
