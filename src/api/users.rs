//! Users service.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::{QueryParams, UserId};
use crate::Result;

const USERS: Endpoint = Endpoint::get("/users");
const CREATE_USER: Endpoint = Endpoint::post("/users");

/// Service for user operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(
/// #     client: wealthsimple_rs::WealthsimpleClient,
/// #     tokens: wealthsimple_rs::TokenPair,
/// # ) -> wealthsimple_rs::Result<()> {
/// use wealthsimple_rs::UserId;
///
/// let users = client.users().list(&tokens, None).await?;
/// let user = client.users().get(&tokens, &UserId::new("user-abc123")).await?;
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a user.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        user: &B,
    ) -> Result<Value> {
        self.inner
            .send(&CREATE_USER, Some(tokens.access_token.as_str()), user)
            .await
    }

    /// List users visible to the token's owner.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&USERS, Some(tokens.access_token.as_str()), query)
            .await
    }

    /// Get a user by ID.
    pub async fn get(&self, tokens: &TokenPair, user_id: &UserId) -> Result<Value> {
        let endpoint = Endpoint::resource(Method::GET, "/users", user_id.as_str())?;
        self.inner
            .fetch(&endpoint, Some(tokens.access_token.as_str()), None)
            .await
    }
}
