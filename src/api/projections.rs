//! Projections service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::QueryParams;
use crate::Result;

const PROJECTIONS: Endpoint = Endpoint::get("/projections");

/// Service for portfolio growth projections.
pub struct ProjectionsService {
    inner: Arc<ClientInner>,
}

impl ProjectionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a projection.
    ///
    /// Projection inputs (account, contribution amounts, horizon, ...) are
    /// query parameters.
    pub async fn get(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&PROJECTIONS, Some(tokens.access_token.as_str()), query)
            .await
    }
}
