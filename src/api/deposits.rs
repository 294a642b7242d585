//! Deposits service for funding accounts.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::{FundsTransferId, QueryParams};
use crate::Result;

const DEPOSITS: Endpoint = Endpoint::get("/deposits");
const CREATE_DEPOSIT: Endpoint = Endpoint::post("/deposits");

/// Service for deposit operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(
/// #     client: wealthsimple_rs::WealthsimpleClient,
/// #     tokens: wealthsimple_rs::TokenPair,
/// # ) -> wealthsimple_rs::Result<()> {
/// use serde_json::json;
/// use wealthsimple_rs::FundsTransferId;
///
/// let deposit = client.deposits().create(&tokens, &json!({
///     "bank_account_id": "bank_account-123",
///     "account_id": "tfsa-zxcvb",
///     "amount": { "amount": "500.00", "currency": "CAD" },
/// })).await?;
///
/// let id = FundsTransferId::new(deposit["id"].as_str().unwrap_or_default());
/// let status = client.deposits().get(&tokens, &id).await?;
/// # Ok(())
/// # }
/// ```
pub struct DepositsService {
    inner: Arc<ClientInner>,
}

impl DepositsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a deposit from a linked bank account.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        deposit: &B,
    ) -> Result<Value> {
        self.inner
            .send(&CREATE_DEPOSIT, Some(tokens.access_token.as_str()), deposit)
            .await
    }

    /// List deposits.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&DEPOSITS, Some(tokens.access_token.as_str()), query)
            .await
    }

    /// Get a single deposit by its funds transfer ID.
    pub async fn get(
        &self,
        tokens: &TokenPair,
        funds_transfer_id: &FundsTransferId,
    ) -> Result<Value> {
        let endpoint = Endpoint::resource(Method::GET, "/deposits", funds_transfer_id.as_str())?;
        self.inner
            .fetch(&endpoint, Some(tokens.access_token.as_str()), None)
            .await
    }
}
