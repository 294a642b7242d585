//! Transactions service for account history.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::QueryParams;
use crate::Result;

const TRANSACTIONS: Endpoint = Endpoint::get("/transactions/");

/// Service for transaction history operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(
/// #     client: wealthsimple_rs::WealthsimpleClient,
/// #     tokens: wealthsimple_rs::TokenPair,
/// # ) -> wealthsimple_rs::Result<()> {
/// use wealthsimple_rs::QueryParams;
///
/// let query = QueryParams::new()
///     .account_id("rrsp-qwerty")
///     .insert("type", "deposit")
///     .limit(100);
/// let page = client.transactions().list(&tokens, Some(&query)).await?;
/// if let Some(results) = page["results"].as_array() {
///     println!("{} transactions", results.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List transactions.
    ///
    /// Filters and pagination are passed through in `query`. Following
    /// further pages is up to the caller.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&TRANSACTIONS, Some(tokens.access_token.as_str()), query)
            .await
    }
}
