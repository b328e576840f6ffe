use super::common::{IncludeItem, Pagination, TimeRange, Wallet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountFundsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetAccountDetailsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountStatementRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Limited to the last 90 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_date_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_item: Option<IncludeItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCurrencyRatesRequest {
    /// Only `GBP` is currently supported by the exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDeveloperAppKeysRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperAppKeysRequest {
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFundsRequest {
    pub from: Wallet,
    pub to: Wallet,
    #[serde(with = "super::decimal_serde")]
    pub amount: Decimal,
}
