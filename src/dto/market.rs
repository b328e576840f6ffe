use super::common::{
    MarketBettingType, MarketProjection, MarketSort, MatchProjection, OrderProjection,
    OrderStatus, PriceData, RollupModel, TimeGranularity, TimeRange,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selects markets for the navigation and catalogue operations.
///
/// Every field is optional and only the ones set are sent, so
/// `MarketFilter::default()` matches all markets. Build one with struct
/// update syntax:
///
/// ```
/// use betfair_rest::dto::MarketFilter;
///
/// let filter = MarketFilter {
///     event_type_ids: Some(vec!["1".to_string()]),
///     in_play_only: Some(false),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFilter {
    /// Free text matched against market, event and competition names.
    /// A `*` wildcard is allowed anywhere but the first character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ids: Option<Vec<String>>,
    /// Only horse racing markets have venues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsp_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_in_play_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_play_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_betting_types: Option<Vec<MarketBettingType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_countries: Option<Vec<String>>,
    /// e.g. `MATCH_ODDS`, `HALF_TIME_SCORE`. Prefer these to market names,
    /// which are localised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_type_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_start_time: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_orders: Option<Vec<OrderStatus>>,
    /// e.g. `Hurdle`, `Flat`, `Chase`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_types: Option<Vec<String>>,
}

impl MarketFilter {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text_query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn for_markets<I, S>(market_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            market_ids: Some(market_ids.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// Body shared by listEventTypes, listCompetitions, listEvents,
/// listMarketTypes, listCountries and listVenues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFilterRequest {
    pub filter: MarketFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl MarketFilterRequest {
    pub fn new(filter: MarketFilter) -> Self {
        Self {
            filter,
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl From<MarketFilter> for MarketFilterRequest {
    fn from(filter: MarketFilter) -> Self {
        Self::new(filter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimeRangesRequest {
    pub filter: MarketFilter,
    pub granularity: TimeGranularity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMarketCatalogueRequest {
    pub filter: MarketFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_projection: Option<Vec<MarketProjection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<MarketSort>,
    /// Between 1 and 1000; required by the API.
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ListMarketCatalogueRequest {
    pub fn new(filter: MarketFilter, max_results: u32) -> Self {
        Self {
            filter,
            market_projection: None,
            sort: None,
            max_results,
            locale: None,
        }
    }

    pub fn with_projection(mut self, projection: Vec<MarketProjection>) -> Self {
        self.market_projection = Some(projection);
        self
    }

    pub fn with_sort(mut self, sort: MarketSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Which price data to return for each runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_data: Option<Vec<PriceData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex_best_offers_overrides: Option<ExBestOffersOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollover_stakes: Option<bool>,
}

impl PriceProjection {
    pub fn new(price_data: Vec<PriceData>) -> Self {
        Self {
            price_data: Some(price_data),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExBestOffersOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_prices_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollup_model: Option<RollupModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollup_limit: Option<u32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub rollup_liability_threshold: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollup_liability_factor: Option<u32>,
}

/// Projection options shared by listMarketBook and listRunnerBook.
///
/// Merged at the top level of the request body next to the market and
/// selection identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_projection: Option<PriceProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_projection: Option<OrderProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_projection: Option<MatchProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_overall_position: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_matched_by_strategy_ref: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMarketBookRequest {
    pub market_ids: Vec<String>,
    #[serde(flatten)]
    pub options: BookOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRunnerBookRequest {
    pub market_id: String,
    pub selection_id: i64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub handicap: Option<Decimal>,
    #[serde(flatten)]
    pub options: BookOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMarketProfitAndLossRequest {
    pub market_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_settled_bets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_bsp_bets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_of_commission: Option<bool>,
}
