use crate::auth::Authenticator;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::dto::*;
use crate::endpoint::{self, ApiArea};
use crate::manager::{self, Manager};
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::Value;

/// Client for the Accounts API.
pub struct AccountsManager {
    dispatcher: Dispatcher,
}

impl Manager for AccountsManager {
    const AREA: ApiArea = ApiArea::Account;

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl AccountsManager {
    pub async fn connect(config: &Config, authenticator: &dyn Authenticator) -> Result<Self> {
        manager::connect(config, authenticator).await
    }

    /// Available to bet amount, exposure and commission for a wallet.
    pub async fn get_account_funds(&self, wallet: Option<Wallet>) -> Result<Value> {
        let request = GetAccountFundsRequest { wallet };
        self.call(&endpoint::GET_ACCOUNT_FUNDS, &request).await
    }

    pub async fn get_account_details(&self) -> Result<Value> {
        self.call(&endpoint::GET_ACCOUNT_DETAILS, &GetAccountDetailsRequest {})
            .await
    }

    pub async fn get_account_statement(
        &self,
        request: &GetAccountStatementRequest,
    ) -> Result<Value> {
        self.call(&endpoint::GET_ACCOUNT_STATEMENT, request).await
    }

    pub async fn list_currency_rates(&self, from_currency: Option<String>) -> Result<Value> {
        let request = ListCurrencyRatesRequest { from_currency };
        self.call(&endpoint::LIST_CURRENCY_RATES, &request).await
    }

    pub async fn get_developer_app_keys(&self) -> Result<Value> {
        self.call(
            &endpoint::GET_DEVELOPER_APP_KEYS,
            &GetDeveloperAppKeysRequest {},
        )
        .await
    }

    /// Create the delayed and live application keys for `app_name`. The
    /// name must be unique across all Betfair developers.
    pub async fn create_developer_app_keys(&self, app_name: impl Into<String>) -> Result<Value> {
        let request = CreateDeveloperAppKeysRequest {
            app_name: app_name.into(),
        };
        self.call(&endpoint::CREATE_DEVELOPER_APP_KEYS, &request)
            .await
    }

    pub async fn transfer_funds(&self, from: Wallet, to: Wallet, amount: Decimal) -> Result<Value> {
        let request = TransferFundsRequest { from, to, amount };
        self.call(&endpoint::TRANSFER_FUNDS, &request).await
    }
}
