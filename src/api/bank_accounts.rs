//! Bank accounts service.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::QueryParams;
use crate::Result;

const BANK_ACCOUNTS: Endpoint = Endpoint::get("/bank_accounts");

/// Service for linked bank accounts.
pub struct BankAccountsService {
    inner: Arc<ClientInner>,
}

impl BankAccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List bank accounts linked for funding.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&BANK_ACCOUNTS, Some(tokens.access_token.as_str()), query)
            .await
    }
}
