use crate::endpoint::{Endpoint, HttpMethod};
use crate::session::Session;
use anyhow::Result;
use reqwest::{Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Build `root/endpoint/` without doubled or missing slashes.
pub fn endpoint_url(root: &str, endpoint: &str) -> String {
    format!(
        "{}/{}/",
        root.trim_end_matches('/'),
        endpoint.trim_matches('/')
    )
}

/// Add each top-level field of `body` to the query string, percent-encoded.
///
/// Arrays repeat their key once per element. Strings go in bare, anything
/// else as its JSON text. A body that is not an object adds nothing.
pub fn append_query(url: &mut Url, body: Value) {
    let Value::Object(fields) = body else {
        return;
    };
    if fields.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in fields {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.append_pair(&key, &query_value(item));
                }
            }
            other => {
                pairs.append_pair(&key, &query_value(other));
            }
        }
    }
}

fn query_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Status and body of a completed request, before any decoding.
///
/// Non-2xx statuses are returned like any other: the body may carry an
/// API error payload only the caller can interpret.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends request bodies to one API root with one authenticated client.
pub struct Dispatcher {
    client: Client,
    root: String,
    log_responses: bool,
}

impl Dispatcher {
    /// The session's headers are installed on the client once, here; a bad
    /// key or token is reported now rather than on the first request.
    pub fn new(root: impl Into<String>, session: &Session, log_responses: bool) -> Result<Self> {
        let client = Client::builder()
            .default_headers(session.headers()?)
            .build()?;
        Ok(Self::with_client(client, root, log_responses))
    }

    pub fn with_client(client: Client, root: impl Into<String>, log_responses: bool) -> Self {
        let root = root.into().trim_end_matches('/').to_string();
        Self {
            client,
            root,
            log_responses,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        endpoint_url(&self.root, endpoint.path)
    }

    /// Serialize `body`, send it to `endpoint`, and hand back the raw response.
    ///
    /// Transport errors propagate as-is. Nothing is retried: order
    /// placement is not idempotent.
    pub async fn dispatch<B>(&self, endpoint: &Endpoint, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(endpoint);
        let payload = serde_json::to_string(body)?;
        debug!("API request to {}: {}", url, payload);

        let request = match endpoint.method {
            HttpMethod::Post => self.client.post(&url).body(payload),
            HttpMethod::Get => {
                let mut url = Url::parse(&url)?;
                append_query(&mut url, serde_json::from_str(&payload)?);
                self.client.get(url)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("API response status: {}", status);
        debug!("API response: {}", body);

        if !status.is_success() {
            warn!("{} returned status {}", endpoint.path, status);
        }
        if self.log_responses {
            self.print_response(&body);
        }

        Ok(ApiResponse { status, body })
    }

    /// Dispatch and decode the body as JSON.
    pub async fn call<B, U>(&self, endpoint: &Endpoint, body: &B) -> Result<U>
    where
        B: Serialize + ?Sized,
        U: DeserializeOwned,
    {
        self.dispatch(endpoint, body).await?.json()
    }

    fn print_response(&self, body: &str) {
        match serde_json::from_str::<Value>(body)
            .and_then(|value| serde_json::to_string_pretty(&value))
        {
            Ok(pretty) => info!("{}", pretty),
            Err(_) => info!("{}", body),
        }
    }
}
