//! Daily values service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::QueryParams;
use crate::Result;

const DAILY_VALUES: Endpoint = Endpoint::get("/daily_values/");

/// Service for historical account values.
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
///     .account_id("tfsa-zxcvb")
///     .start_date("2024-01-01")
///     .end_date("2024-03-31");
/// let values = client.daily_values().list(&tokens, Some(&query)).await?;
/// # Ok(())
/// # }
/// ```
pub struct DailyValuesService {
    inner: Arc<ClientInner>,
}

impl DailyValuesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List daily values, typically filtered by account and date range.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&DAILY_VALUES, Some(tokens.access_token.as_str()), query)
            .await
    }
}
