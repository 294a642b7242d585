//! Positions service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::QueryParams;
use crate::Result;

const POSITIONS: Endpoint = Endpoint::get("/positions/");

/// Service for holdings.
pub struct PositionsService {
    inner: Arc<ClientInner>,
}

impl PositionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List positions, optionally filtered by account or date.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&POSITIONS, Some(tokens.access_token.as_str()), query)
            .await
    }
}
