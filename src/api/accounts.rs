//! Accounts service for account operations.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::{AccountId, QueryParams};
use crate::Result;

const ACCOUNTS: Endpoint = Endpoint::get("/accounts");
const CREATE_ACCOUNT: Endpoint = Endpoint::post("/accounts");
const ACCOUNT_TYPES: Endpoint = Endpoint::get("/accounts/account_types");

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(
/// #     client: wealthsimple_rs::WealthsimpleClient,
/// #     tokens: wealthsimple_rs::TokenPair,
/// # ) -> wealthsimple_rs::Result<()> {
/// use wealthsimple_rs::{AccountId, QueryParams};
///
/// // List accounts, 20 at a time
/// let page = client.accounts().list(&tokens, Some(&QueryParams::new().limit(20))).await?;
/// println!("{}", page["total_count"]);
///
/// // Get details for one account
/// let account = client.accounts().get(&tokens, &AccountId::new("rrsp-qwerty")).await?;
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Open a new account.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        account: &B,
    ) -> Result<Value> {
        self.inner
            .send(&CREATE_ACCOUNT, Some(tokens.access_token.as_str()), account)
            .await
    }

    /// List accounts.
    ///
    /// Pagination (`limit`, `offset`) and filters are passed through in
    /// `query`; the raw page is returned.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&ACCOUNTS, Some(tokens.access_token.as_str()), query)
            .await
    }

    /// Get details for a specific account.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The caller's token pair
    /// * `account_id` - The account to retrieve
    pub async fn get(&self, tokens: &TokenPair, account_id: &AccountId) -> Result<Value> {
        let endpoint = Endpoint::resource(Method::GET, "/accounts", account_id.as_str())?;
        self.inner
            .fetch(&endpoint, Some(tokens.access_token.as_str()), None)
            .await
    }

    /// List the account types that can be opened.
    pub async fn account_types(&self, tokens: &TokenPair) -> Result<Value> {
        self.inner
            .fetch(&ACCOUNT_TYPES, Some(tokens.access_token.as_str()), None)
            .await
    }
}
