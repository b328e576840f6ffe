use super::common::{
    BetStatus, BetTargetType, GroupBy, OrderBy, OrderProjection, OrderType, Pagination,
    PersistenceType, Side, SortDir, TimeInForce, TimeRange,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketVersion {
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<PlaceInstruction>,
    /// De-duplicates re-submissions within a 60 second window. Up to 32 chars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    /// Bets lapse if the market has moved past this version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_version: Option<MarketVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_ref: Option<String>,
    #[serde(rename = "async")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_: Option<bool>,
}

impl PlaceOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<PlaceInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
            market_version: None,
            customer_strategy_ref: None,
            async_: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInstruction {
    pub order_type: OrderType,
    pub selection_id: i64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub handicap: Option<Decimal>,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_order: Option<LimitOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_on_close_order: Option<LimitOnCloseOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_on_close_order: Option<MarketOnCloseOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_ref: Option<String>,
}

impl PlaceInstruction {
    pub fn limit(selection_id: i64, side: Side, order: LimitOrder) -> Self {
        Self {
            order_type: OrderType::Limit,
            selection_id,
            handicap: None,
            side,
            limit_order: Some(order),
            limit_on_close_order: None,
            market_on_close_order: None,
            customer_order_ref: None,
        }
    }

    pub fn limit_on_close(selection_id: i64, side: Side, order: LimitOnCloseOrder) -> Self {
        Self {
            order_type: OrderType::LimitOnClose,
            selection_id,
            handicap: None,
            side,
            limit_order: None,
            limit_on_close_order: Some(order),
            market_on_close_order: None,
            customer_order_ref: None,
        }
    }

    pub fn market_on_close(selection_id: i64, side: Side, order: MarketOnCloseOrder) -> Self {
        Self {
            order_type: OrderType::MarketOnClose,
            selection_id,
            handicap: None,
            side,
            limit_order: None,
            limit_on_close_order: None,
            market_on_close_order: Some(order),
            customer_order_ref: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    #[serde(with = "super::decimal_serde")]
    pub size: Decimal,
    #[serde(with = "super::decimal_serde")]
    pub price: Decimal,
    pub persistence_type: PersistenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub min_fill_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_target_type: Option<BetTargetType>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub bet_target_size: Option<Decimal>,
}

impl LimitOrder {
    pub fn new(size: Decimal, price: Decimal, persistence_type: PersistenceType) -> Self {
        Self {
            size,
            price,
            persistence_type,
            time_in_force: None,
            min_fill_size: None,
            bet_target_type: None,
            bet_target_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOnCloseOrder {
    #[serde(with = "super::decimal_serde")]
    pub liability: Decimal,
    #[serde(with = "super::decimal_serde")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOnCloseOrder {
    #[serde(with = "super::decimal_serde")]
    pub liability: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrdersRequest {
    /// Without a market ID every unmatched bet on the account is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<CancelInstruction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

impl CancelOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<CancelInstruction>) -> Self {
        Self {
            market_id: Some(market_id.into()),
            instructions: Some(instructions),
            customer_ref: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInstruction {
    pub bet_id: String,
    /// Partial cancel; the whole remaining size when absent.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_reduction: Option<Decimal>,
}

impl CancelInstruction {
    pub fn new(bet_id: impl Into<String>) -> Self {
        Self {
            bet_id: bet_id.into(),
            size_reduction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<ReplaceInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_version: Option<MarketVersion>,
    #[serde(rename = "async")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_: Option<bool>,
}

impl ReplaceOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<ReplaceInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
            market_version: None,
            async_: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceInstruction {
    pub bet_id: String,
    #[serde(with = "super::decimal_serde")]
    pub new_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<UpdateInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

impl UpdateOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<UpdateInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
        }
    }
}

/// Changes the persistence of an unmatched bet; nothing else can be updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstruction {
    pub bet_id: String,
    pub new_persistence_type: PersistenceType,
}

/// With no fields set, returns up to 1000 current orders ordered `BY_BET`
/// and sorted `EARLIEST_TO_LATEST`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCurrentOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_projection: Option<OrderProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_refs: Option<Vec<String>>,
    /// Interpreted as placed, matched, voided or settled date depending on
    /// `order_by`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClearedOrdersRequest {
    pub bet_status: BetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_date_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_item_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ListClearedOrdersRequest {
    pub fn new(bet_status: BetStatus) -> Self {
        Self {
            bet_status,
            event_type_ids: None,
            event_ids: None,
            market_ids: None,
            runner_ids: None,
            bet_ids: None,
            customer_order_refs: None,
            customer_strategy_refs: None,
            side: None,
            settled_date_range: None,
            group_by: None,
            include_item_description: None,
            locale: None,
            pagination: Pagination::default(),
        }
    }
}
