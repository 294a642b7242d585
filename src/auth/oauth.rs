//! OAuth token exchange and refresh.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::client::endpoint::OAUTH_TOKEN;
use crate::client::ClientInner;
use crate::Result;

use super::TokenPair;

/// Service for the `/oauth/token` endpoint.
///
/// Every token request carries the client's application credentials in the
/// JSON body; none of these calls send a bearer token.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: wealthsimple_rs::WealthsimpleClient) -> wealthsimple_rs::Result<()> {
/// let tokens = client.oauth().exchange("auth-code").await?;
///
/// // Later, before calling the API again
/// let current = client.oauth().refresh_if_expired(&tokens).await?;
/// if current != tokens {
///     // persist the new pair
/// }
/// # Ok(())
/// # }
/// ```
pub struct OAuthService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
}

impl OAuthService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Exchange an authorization code for a token pair.
    pub async fn exchange(&self, code: &str) -> Result<TokenPair> {
        self.token_request("authorization_code", Some(code), None)
            .await
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        self.token_request("refresh_token", None, Some(refresh_token))
            .await
    }

    /// Refresh `tokens` only if the access token has expired.
    ///
    /// An unexpired pair is returned as an equal copy without any network
    /// call. An expired pair is exchanged through [`refresh`](Self::refresh)
    /// and the new pair returned; a failed refresh is returned as an error.
    /// The input is never modified.
    pub async fn refresh_if_expired(&self, tokens: &TokenPair) -> Result<TokenPair> {
        if !tokens.is_expired() {
            return Ok(tokens.clone());
        }

        debug!(
            created_at = tokens.created_at,
            expires_in = tokens.expires_in,
            "access token expired, refreshing"
        );
        self.refresh(&tokens.refresh_token).await
    }

    async fn token_request(
        &self,
        grant_type: &'static str,
        code: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<TokenPair> {
        let credentials = &self.inner.credentials;
        let body = TokenRequest {
            grant_type,
            code,
            refresh_token,
            client_id: credentials.client_id(),
            client_secret: credentials.expose_secret(),
            redirect_uri: credentials.redirect_uri(),
        };

        self.inner.send(&OAUTH_TOKEN, None, &body).await
    }
}
