use betfair_rest::config::Domain;
use betfair_rest::dto::*;
use betfair_rest::{BettingManager, Manager, Session};
use mockito::{Matcher, Mock, Server, ServerGuard};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

const ROOT: &str = "/exchange/betting/rest/v1.0";

fn manager(server: &ServerGuard) -> BettingManager {
    let session = Session::new("app-key", "session-token", Domain::Com);
    BettingManager::with_root(format!("{}{}", server.url(), ROOT), &session, false).unwrap()
}

async fn expect_post(server: &mut ServerGuard, operation: &str, body: Value, reply: &str) -> Mock {
    server
        .mock("POST", format!("{ROOT}/{operation}/").as_str())
        .match_header("x-application", "app-key")
        .match_header("x-authentication", "session-token")
        .match_body(Matcher::Json(body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply)
        .expect(1)
        .create_async()
        .await
}

#[tokio::test]
async fn test_list_event_types_text_query() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listEventTypes",
        json!({ "filter": { "textQuery": "Soccer" } }),
        r#"[{"eventType":{"id":"1","name":"Soccer"},"marketCount":2156}]"#,
    )
    .await;

    let result = manager(&server)
        .list_event_types(MarketFilter::text("Soccer"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["marketCount"], 2156);
}

#[tokio::test]
async fn test_navigation_with_locale() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listCompetitions",
        json!({ "filter": { "eventTypeIds": ["1"] }, "locale": "it" }),
        "[]",
    )
    .await;

    let filter = MarketFilter {
        event_type_ids: Some(vec!["1".to_string()]),
        ..Default::default()
    };
    let result = manager(&server)
        .list_competitions(MarketFilterRequest::new(filter).with_locale("it"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_list_time_ranges() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listTimeRanges",
        json!({ "filter": { "inPlayOnly": false }, "granularity": "DAYS" }),
        "[]",
    )
    .await;

    let filter = MarketFilter {
        in_play_only: Some(false),
        ..Default::default()
    };
    manager(&server)
        .list_time_ranges(filter, TimeGranularity::Days)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_market_book_price_projection() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listMarketBook",
        json!({
            "marketIds": ["1.1"],
            "priceProjection": { "priceData": ["EX_BEST_OFFERS"] }
        }),
        r#"[{"marketId":"1.1","status":"OPEN","runners":[]}]"#,
    )
    .await;

    let options = BookOptions {
        price_projection: Some(PriceProjection::new(vec![PriceData::ExBestOffers])),
        ..Default::default()
    };
    let result = manager(&server)
        .list_market_book(vec!["1.1".to_string()], Some(options))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["status"], "OPEN");
}

#[tokio::test]
async fn test_list_market_book_without_options() {
    let mut server = Server::new_async().await;
    let mock = expect_post(&mut server, "listMarketBook", json!({ "marketIds": [] }), "[]").await;

    manager(&server).list_market_book(vec![], None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_runner_book_merges_identifiers() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listRunnerBook",
        json!({
            "marketId": "1.2",
            "selectionId": 47972,
            "orderProjection": "ALL",
            "currencyCode": "EUR"
        }),
        "[]",
    )
    .await;

    let options = BookOptions {
        order_projection: Some(OrderProjection::All),
        currency_code: Some("EUR".to_string()),
        ..Default::default()
    };
    manager(&server)
        .list_runner_book("1.2", 47972, None, Some(options))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_place_limit_order_shape() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "placeOrders",
        json!({
            "marketId": "1.109850906",
            "instructions": [{
                "orderType": "LIMIT",
                "selectionId": 123,
                "side": "BACK",
                "limitOrder": {
                    "size": 3.0,
                    "price": 1.04,
                    "persistenceType": "LAPSE"
                }
            }]
        }),
        r#"{"status":"SUCCESS","marketId":"1.109850906","instructionReports":[]}"#,
    )
    .await;

    let result = manager(&server)
        .place_limit_order("1.109850906", 123, Side::Back, dec!(1.04), dec!(3.0))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result["status"], "SUCCESS");
}

#[tokio::test]
async fn test_partial_failure_left_in_body() {
    let mut server = Server::new_async().await;
    let reply = r#"{"status":"PROCESSED_WITH_ERRORS","errorCode":"BET_ACTION_ERROR"}"#;
    let mock = server
        .mock("POST", format!("{ROOT}/placeOrders/").as_str())
        .with_status(200)
        .with_body(reply)
        .create_async()
        .await;

    let request = PlaceOrdersRequest::new("1.1", vec![]);
    let result = manager(&server).place_orders(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result["status"], "PROCESSED_WITH_ERRORS");
    assert_eq!(result["errorCode"], "BET_ACTION_ERROR");
}

#[tokio::test]
async fn test_cancel_bet() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "cancelOrders",
        json!({ "marketId": "1.1", "instructions": [{ "betId": "31242604945" }] }),
        r#"{"status":"SUCCESS"}"#,
    )
    .await;

    manager(&server).cancel_bet("1.1", "31242604945").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_replace_and_update_orders() {
    let mut server = Server::new_async().await;
    let replace = expect_post(
        &mut server,
        "replaceOrders",
        json!({
            "marketId": "1.1",
            "instructions": [{ "betId": "1", "newPrice": 2.5 }],
            "async": true
        }),
        "{}",
    )
    .await;
    let update = expect_post(
        &mut server,
        "updateOrders",
        json!({
            "marketId": "1.1",
            "instructions": [{ "betId": "1", "newPersistenceType": "PERSIST" }]
        }),
        "{}",
    )
    .await;

    let betting = manager(&server);
    let mut request = ReplaceOrdersRequest::new(
        "1.1",
        vec![ReplaceInstruction {
            bet_id: "1".to_string(),
            new_price: dec!(2.5),
        }],
    );
    request.async_ = Some(true);
    betting.replace_orders(&request).await.unwrap();
    betting
        .update_orders(&UpdateOrdersRequest::new(
            "1.1",
            vec![UpdateInstruction {
                bet_id: "1".to_string(),
                new_persistence_type: PersistenceType::Persist,
            }],
        ))
        .await
        .unwrap();

    replace.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_cleared_orders_uses_its_filters() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listClearedOrders",
        json!({
            "betStatus": "SETTLED",
            "marketIds": ["1.1"],
            "settledDateRange": { "from": "2024-03-01T00:00:00Z" },
            "fromRecord": 0,
            "recordCount": 100
        }),
        r#"{"clearedOrders":[],"moreAvailable":false}"#,
    )
    .await;

    let mut request = ListClearedOrdersRequest::new(BetStatus::Settled);
    request.market_ids = Some(vec!["1.1".to_string()]);
    request.settled_date_range = Some(TimeRange::since(
        "2024-03-01T00:00:00Z".parse().unwrap(),
    ));
    request.pagination = Pagination::new(0, 100);
    let result = manager(&server).list_cleared_orders(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result["moreAvailable"], false);
}

#[tokio::test]
async fn test_non_json_body_fails_decoding() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", format!("{ROOT}/listCurrentOrders/").as_str())
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = manager(&server)
        .list_current_orders(&ListCurrentOrdersRequest::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.downcast_ref::<serde_json::Error>().is_some());
}

#[tokio::test]
async fn test_connection_refused_then_still_usable() {
    let session = Session::new("app-key", "session-token", Domain::Com);
    let betting = BettingManager::with_root("http://127.0.0.1:1", &session, false).unwrap();

    for _ in 0..2 {
        let err = betting
            .list_event_types(MarketFilter::default())
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<reqwest::Error>().is_some());
    }
}

#[tokio::test]
async fn test_list_events() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listEvents",
        json!({ "filter": { "competitionIds": ["10932509"] } }),
        r#"[{"event":{"id":"33012345","name":"Arsenal v Chelsea"},"marketCount":48}]"#,
    )
    .await;

    let filter = MarketFilter {
        competition_ids: Some(vec!["10932509".to_string()]),
        ..Default::default()
    };
    let result = manager(&server).list_events(filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["event"]["name"], "Arsenal v Chelsea");
}

#[tokio::test]
async fn test_list_market_types() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listMarketTypes",
        json!({ "filter": { "eventTypeIds": ["1"] }, "locale": "es" }),
        r#"[{"marketType":"MATCH_ODDS","marketCount":1200}]"#,
    )
    .await;

    let filter = MarketFilter {
        event_type_ids: Some(vec!["1".to_string()]),
        ..Default::default()
    };
    let result = manager(&server)
        .list_market_types(MarketFilterRequest::new(filter).with_locale("es"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["marketType"], "MATCH_ODDS");
}

#[tokio::test]
async fn test_list_countries() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listCountries",
        json!({ "filter": { "eventTypeIds": ["7"] } }),
        r#"[{"countryCode":"GB","marketCount":310}]"#,
    )
    .await;

    let filter = MarketFilter {
        event_type_ids: Some(vec!["7".to_string()]),
        ..Default::default()
    };
    let result = manager(&server).list_countries(filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["countryCode"], "GB");
}

#[tokio::test]
async fn test_list_venues() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listVenues",
        json!({ "filter": { "eventTypeIds": ["7"], "marketCountries": ["GB"] } }),
        r#"[{"venue":"Ascot","marketCount":24}]"#,
    )
    .await;

    let filter = MarketFilter {
        event_type_ids: Some(vec!["7".to_string()]),
        market_countries: Some(vec!["GB".to_string()]),
        ..Default::default()
    };
    let result = manager(&server).list_venues(filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["venue"], "Ascot");
}

#[tokio::test]
async fn test_list_market_catalogue() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listMarketCatalogue",
        json!({
            "filter": { "eventIds": ["33012345"], "marketTypeCodes": ["MATCH_ODDS"] },
            "marketProjection": ["EVENT", "RUNNER_DESCRIPTION"],
            "sort": "MAXIMUM_TRADED",
            "maxResults": 25,
            "locale": "it"
        }),
        r#"[{"marketId":"1.1","marketName":"Match Odds","totalMatched":1500.5}]"#,
    )
    .await;

    let filter = MarketFilter {
        event_ids: Some(vec!["33012345".to_string()]),
        market_type_codes: Some(vec!["MATCH_ODDS".to_string()]),
        ..Default::default()
    };
    let mut request = ListMarketCatalogueRequest::new(filter, 25)
        .with_projection(vec![
            MarketProjection::Event,
            MarketProjection::RunnerDescription,
        ])
        .with_sort(MarketSort::MaximumTraded);
    request.locale = Some("it".to_string());
    let result = manager(&server)
        .list_market_catalogue(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["marketName"], "Match Odds");
}

#[tokio::test]
async fn test_list_market_profit_and_loss() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listMarketProfitAndLoss",
        json!({
            "marketIds": ["1.1"],
            "includeSettledBets": false,
            "netOfCommission": true
        }),
        r#"[{"marketId":"1.1","profitAndLosses":[]}]"#,
    )
    .await;

    let request = ListMarketProfitAndLossRequest {
        market_ids: vec!["1.1".to_string()],
        include_settled_bets: Some(false),
        net_of_commission: Some(true),
        ..Default::default()
    };
    let result = manager(&server)
        .list_market_profit_and_loss(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result[0]["profitAndLosses"], json!([]));
}

#[tokio::test]
async fn test_list_current_orders() {
    let mut server = Server::new_async().await;
    let mock = expect_post(
        &mut server,
        "listCurrentOrders",
        json!({
            "marketIds": ["1.1"],
            "orderProjection": "EXECUTABLE",
            "orderBy": "BY_PLACE_TIME",
            "sortDir": "LATEST_TO_EARLIEST",
            "recordCount": 10
        }),
        r#"{"currentOrders":[{"betId":"1","status":"EXECUTABLE"}],"moreAvailable":false}"#,
    )
    .await;

    let request = ListCurrentOrdersRequest {
        market_ids: Some(vec!["1.1".to_string()]),
        order_projection: Some(OrderProjection::Executable),
        order_by: Some(OrderBy::ByPlaceTime),
        sort_dir: Some(SortDir::LatestToEarliest),
        pagination: Pagination {
            from_record: None,
            record_count: Some(10),
        },
        ..Default::default()
    };
    let result = manager(&server)
        .list_current_orders(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result["currentOrders"][0]["status"], "EXECUTABLE");
}
