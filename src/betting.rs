use crate::auth::Authenticator;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::dto::*;
use crate::endpoint::{self, ApiArea, Endpoint};
use crate::manager::{self, Manager};
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::Value;

/// Client for the Betting API: navigation, prices and order management.
///
/// Every method returns the decoded response body untouched. API-level
/// failures such as a `PROCESSED_WITH_ERRORS` placement report are left in
/// the JSON for the caller to inspect.
pub struct BettingManager {
    dispatcher: Dispatcher,
}

impl Manager for BettingManager {
    const AREA: ApiArea = ApiArea::Betting;

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl BettingManager {
    pub async fn connect(config: &Config, authenticator: &dyn Authenticator) -> Result<Self> {
        manager::connect(config, authenticator).await
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    async fn navigate(&self, endpoint: &Endpoint, request: MarketFilterRequest) -> Result<Value> {
        self.call(endpoint, &request).await
    }

    /// Event types (sports) with a market count for each.
    ///
    /// Accepts a bare [`MarketFilter`] or a [`MarketFilterRequest`] that also
    /// carries a locale.
    pub async fn list_event_types(&self, request: impl Into<MarketFilterRequest>) -> Result<Value> {
        self.navigate(&endpoint::LIST_EVENT_TYPES, request.into()).await
    }

    pub async fn list_competitions(
        &self,
        request: impl Into<MarketFilterRequest>,
    ) -> Result<Value> {
        self.navigate(&endpoint::LIST_COMPETITIONS, request.into()).await
    }

    /// Market counts bucketed by start time.
    pub async fn list_time_ranges(
        &self,
        filter: MarketFilter,
        granularity: TimeGranularity,
    ) -> Result<Value> {
        let request = ListTimeRangesRequest {
            filter,
            granularity,
        };
        self.call(&endpoint::LIST_TIME_RANGES, &request).await
    }

    pub async fn list_events(&self, request: impl Into<MarketFilterRequest>) -> Result<Value> {
        self.navigate(&endpoint::LIST_EVENTS, request.into()).await
    }

    pub async fn list_market_types(
        &self,
        request: impl Into<MarketFilterRequest>,
    ) -> Result<Value> {
        self.navigate(&endpoint::LIST_MARKET_TYPES, request.into()).await
    }

    pub async fn list_countries(&self, request: impl Into<MarketFilterRequest>) -> Result<Value> {
        self.navigate(&endpoint::LIST_COUNTRIES, request.into()).await
    }

    pub async fn list_venues(&self, request: impl Into<MarketFilterRequest>) -> Result<Value> {
        self.navigate(&endpoint::LIST_VENUES, request.into()).await
    }

    // ========================================================================
    // Markets and prices
    // ========================================================================

    pub async fn list_market_catalogue(&self, request: &ListMarketCatalogueRequest) -> Result<Value> {
        self.call(&endpoint::LIST_MARKET_CATALOGUE, request).await
    }

    /// Books for `market_ids`. Options left as `None` are not sent, so the
    /// API defaults apply.
    pub async fn list_market_book(
        &self,
        market_ids: Vec<String>,
        options: Option<BookOptions>,
    ) -> Result<Value> {
        let request = ListMarketBookRequest {
            market_ids,
            options: options.unwrap_or_default(),
        };
        self.call(&endpoint::LIST_MARKET_BOOK, &request).await
    }

    pub async fn list_runner_book(
        &self,
        market_id: impl Into<String>,
        selection_id: i64,
        handicap: Option<Decimal>,
        options: Option<BookOptions>,
    ) -> Result<Value> {
        let request = ListRunnerBookRequest {
            market_id: market_id.into(),
            selection_id,
            handicap,
            options: options.unwrap_or_default(),
        };
        self.call(&endpoint::LIST_RUNNER_BOOK, &request).await
    }

    pub async fn list_market_profit_and_loss(
        &self,
        request: &ListMarketProfitAndLossRequest,
    ) -> Result<Value> {
        self.call(&endpoint::LIST_MARKET_PROFIT_AND_LOSS, request)
            .await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn list_current_orders(&self, request: &ListCurrentOrdersRequest) -> Result<Value> {
        self.call(&endpoint::LIST_CURRENT_ORDERS, request).await
    }

    pub async fn list_cleared_orders(&self, request: &ListClearedOrdersRequest) -> Result<Value> {
        self.call(&endpoint::LIST_CLEARED_ORDERS, request).await
    }

    /// Submit a batch of instructions for one market.
    ///
    /// Never retried here. A duplicate submission places duplicate bets
    /// unless `customer_ref` is set.
    pub async fn place_orders(&self, request: &PlaceOrdersRequest) -> Result<Value> {
        self.call(&endpoint::PLACE_ORDERS, request).await
    }

    pub async fn cancel_orders(&self, request: &CancelOrdersRequest) -> Result<Value> {
        self.call(&endpoint::CANCEL_ORDERS, request).await
    }

    /// Cancel and re-place bets at new prices. Cancellation and placement
    /// are reported separately in the response.
    pub async fn replace_orders(&self, request: &ReplaceOrdersRequest) -> Result<Value> {
        self.call(&endpoint::REPLACE_ORDERS, request).await
    }

    pub async fn update_orders(&self, request: &UpdateOrdersRequest) -> Result<Value> {
        self.call(&endpoint::UPDATE_ORDERS, request).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Place a single LIMIT bet that lapses when the market turns in-play.
    pub async fn place_limit_order(
        &self,
        market_id: impl Into<String>,
        selection_id: i64,
        side: Side,
        price: Decimal,
        size: Decimal,
    ) -> Result<Value> {
        let order = LimitOrder::new(size, price, PersistenceType::Lapse);
        let request = PlaceOrdersRequest::new(
            market_id,
            vec![PlaceInstruction::limit(selection_id, side, order)],
        );
        self.place_orders(&request).await
    }

    /// Cancel whatever remains unmatched of one bet.
    pub async fn cancel_bet(
        &self,
        market_id: impl Into<String>,
        bet_id: impl Into<String>,
    ) -> Result<Value> {
        let request = CancelOrdersRequest::new(market_id, vec![CancelInstruction::new(bet_id)]);
        self.cancel_orders(&request).await
    }
}
