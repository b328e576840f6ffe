use betfair_rest::config::Domain;
use betfair_rest::dispatcher::endpoint_url;
use betfair_rest::endpoint::{self, ApiArea, Endpoint, ACCOUNT_ENDPOINTS, BETTING_ENDPOINTS};
use betfair_rest::{Dispatcher, Session};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn session() -> Session {
    Session::new("app-key", "session-token", Domain::Com)
}

#[test]
fn test_every_endpoint_url_has_single_trailing_slash() {
    for endpoint in BETTING_ENDPOINTS.iter().chain(ACCOUNT_ENDPOINTS) {
        for root in [
            endpoint.area.root(Domain::Com),
            format!("{}/", endpoint.area.root(Domain::Com)),
        ] {
            let url = endpoint_url(&root, endpoint.path);
            assert!(url.ends_with(&format!("/{}/", endpoint.path)), "{url}");
            assert!(!url.trim_start_matches("https://").contains("//"), "{url}");
        }
    }
}

#[test]
fn test_dispatcher_url_for() {
    let dispatcher = Dispatcher::new(
        "https://api.betfair.es/exchange/betting/rest/v1.0/",
        &session(),
        false,
    )
    .unwrap();
    assert_eq!(
        dispatcher.url_for(&endpoint::LIST_MARKET_BOOK),
        "https://api.betfair.es/exchange/betting/rest/v1.0/listMarketBook/"
    );
}

#[tokio::test]
async fn test_post_sends_headers_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/listEventTypes/")
        .match_header("x-application", "app-key")
        .match_header("x-authentication", "session-token")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!({ "filter": {} })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"eventType":{"id":"1","name":"Soccer"},"marketCount":1000}]"#)
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(server.url(), &session(), false).unwrap();
    let response = dispatcher
        .dispatch(&endpoint::LIST_EVENT_TYPES, &json!({ "filter": {} }))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
    let value: Value = response.json().unwrap();
    assert_eq!(value[0]["eventType"]["name"], "Soccer");
}

#[tokio::test]
async fn test_get_sends_body_as_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ping/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("marketIds".into(), "1.1".into()),
            Matcher::UrlEncoded("textQuery".into(), "A&B".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let ping = Endpoint::get(ApiArea::Betting, "ping");
    let dispatcher = Dispatcher::new(server.url(), &session(), false).unwrap();
    let response = dispatcher
        .dispatch(&ping, &json!({ "marketIds": ["1.1"], "textQuery": "A&B" }))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let mut server = Server::new_async().await;
    let body = r#"{"faultcode":"Client","faultstring":"ANGX-0004","detail":{}}"#;
    let mock = server
        .mock("POST", "/placeOrders/")
        .with_status(400)
        .with_body(body)
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(server.url(), &session(), true).unwrap();
    let response = dispatcher
        .dispatch(&endpoint::PLACE_ORDERS, &json!({}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status.as_u16(), 400);
    assert_eq!(response.body, body);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/placeOrders/")
        .with_status(503)
        .with_body("unavailable")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(server.url(), &session(), false).unwrap();
    let response = dispatcher
        .dispatch(&endpoint::PLACE_ORDERS, &json!({}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status.as_u16(), 503);
    assert!(response.json::<Value>().is_err());
}

#[tokio::test]
async fn test_connection_refused_propagates() {
    let dispatcher = Dispatcher::new("http://127.0.0.1:1", &session(), false).unwrap();

    let err = dispatcher
        .dispatch(&endpoint::LIST_EVENT_TYPES, &json!({ "filter": {} }))
        .await
        .unwrap_err();
    let transport = err.downcast_ref::<reqwest::Error>().unwrap();
    assert!(transport.is_connect() || transport.is_request());

    // Still usable afterwards
    assert!(dispatcher
        .dispatch(&endpoint::LIST_EVENT_TYPES, &json!({ "filter": {} }))
        .await
        .is_err());
}

#[test]
fn test_invalid_token_rejected_at_construction() {
    let session = Session::new("app-key", "bad\ntoken", Domain::Com);
    assert!(Dispatcher::new("http://localhost", &session, false).is_err());
}
