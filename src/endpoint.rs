//! Table of supported REST operations.
//!
//! Each operation is described once here; the managers only pick the right
//! constant and a request body.

use crate::config::Domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Body fields are sent as percent-encoded query pairs.
    Get,
    Post,
}

/// The two API areas, each with its own root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiArea {
    Betting,
    Account,
}

impl ApiArea {
    pub const fn root_template(self) -> &'static str {
        match self {
            ApiArea::Betting => "https://api.betfair.{domain}/exchange/betting/rest/v1.0",
            ApiArea::Account => "https://api.betfair.{domain}/exchange/account/rest/v1.0",
        }
    }

    pub fn root(self, domain: Domain) -> String {
        self.root_template().replace("{domain}", domain.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub area: ApiArea,
    /// Operation name relative to the area root, without slashes.
    pub path: &'static str,
    pub method: HttpMethod,
}

impl Endpoint {
    pub const fn post(area: ApiArea, path: &'static str) -> Self {
        Self {
            area,
            path,
            method: HttpMethod::Post,
        }
    }

    pub const fn get(area: ApiArea, path: &'static str) -> Self {
        Self {
            area,
            path,
            method: HttpMethod::Get,
        }
    }
}

// Betting API
pub const LIST_EVENT_TYPES: Endpoint = Endpoint::post(ApiArea::Betting, "listEventTypes");
pub const LIST_COMPETITIONS: Endpoint = Endpoint::post(ApiArea::Betting, "listCompetitions");
pub const LIST_TIME_RANGES: Endpoint = Endpoint::post(ApiArea::Betting, "listTimeRanges");
pub const LIST_EVENTS: Endpoint = Endpoint::post(ApiArea::Betting, "listEvents");
pub const LIST_MARKET_TYPES: Endpoint = Endpoint::post(ApiArea::Betting, "listMarketTypes");
pub const LIST_COUNTRIES: Endpoint = Endpoint::post(ApiArea::Betting, "listCountries");
pub const LIST_VENUES: Endpoint = Endpoint::post(ApiArea::Betting, "listVenues");
pub const LIST_MARKET_CATALOGUE: Endpoint =
    Endpoint::post(ApiArea::Betting, "listMarketCatalogue");
pub const LIST_MARKET_BOOK: Endpoint = Endpoint::post(ApiArea::Betting, "listMarketBook");
pub const LIST_RUNNER_BOOK: Endpoint = Endpoint::post(ApiArea::Betting, "listRunnerBook");
pub const LIST_MARKET_PROFIT_AND_LOSS: Endpoint =
    Endpoint::post(ApiArea::Betting, "listMarketProfitAndLoss");
pub const LIST_CURRENT_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "listCurrentOrders");
pub const LIST_CLEARED_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "listClearedOrders");
pub const PLACE_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "placeOrders");
pub const CANCEL_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "cancelOrders");
pub const REPLACE_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "replaceOrders");
pub const UPDATE_ORDERS: Endpoint = Endpoint::post(ApiArea::Betting, "updateOrders");

// Accounts API
pub const GET_ACCOUNT_FUNDS: Endpoint = Endpoint::post(ApiArea::Account, "getAccountFunds");
pub const GET_ACCOUNT_DETAILS: Endpoint = Endpoint::post(ApiArea::Account, "getAccountDetails");
pub const GET_ACCOUNT_STATEMENT: Endpoint =
    Endpoint::post(ApiArea::Account, "getAccountStatement");
pub const LIST_CURRENCY_RATES: Endpoint = Endpoint::post(ApiArea::Account, "listCurrencyRates");
pub const GET_DEVELOPER_APP_KEYS: Endpoint =
    Endpoint::post(ApiArea::Account, "getDeveloperAppKeys");
pub const CREATE_DEVELOPER_APP_KEYS: Endpoint =
    Endpoint::post(ApiArea::Account, "createDeveloperAppKeys");
pub const TRANSFER_FUNDS: Endpoint = Endpoint::post(ApiArea::Account, "transferFunds");

pub const BETTING_ENDPOINTS: &[Endpoint] = &[
    LIST_EVENT_TYPES,
    LIST_COMPETITIONS,
    LIST_TIME_RANGES,
    LIST_EVENTS,
    LIST_MARKET_TYPES,
    LIST_COUNTRIES,
    LIST_VENUES,
    LIST_MARKET_CATALOGUE,
    LIST_MARKET_BOOK,
    LIST_RUNNER_BOOK,
    LIST_MARKET_PROFIT_AND_LOSS,
    LIST_CURRENT_ORDERS,
    LIST_CLEARED_ORDERS,
    PLACE_ORDERS,
    CANCEL_ORDERS,
    REPLACE_ORDERS,
    UPDATE_ORDERS,
];

pub const ACCOUNT_ENDPOINTS: &[Endpoint] = &[
    GET_ACCOUNT_FUNDS,
    GET_ACCOUNT_DETAILS,
    GET_ACCOUNT_STATEMENT,
    LIST_CURRENCY_RATES,
    GET_DEVELOPER_APP_KEYS,
    CREATE_DEVELOPER_APP_KEYS,
    TRANSFER_FUNDS,
];
