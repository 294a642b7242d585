//! HTTP client implementation for the Wealthsimple API.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{
    AccountsService, BankAccountsService, DailyValuesService, DepositsService, PeopleService,
    PositionsService, ProjectionsService, TransactionsService, UsersService,
};
use crate::auth::{AppCredentials, OAuthService, TokenPair};
use crate::models::{HealthStatus, QueryParams};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::endpoint::{Endpoint, HEALTHCHECK};

/// The main client for interacting with the Wealthsimple API.
///
/// A client binds one set of [`AppCredentials`] to one [`Environment`].
/// Resource operations are grouped into services returned by method calls;
/// every authenticated operation takes the caller's [`TokenPair`]. The client
/// never stores or refreshes tokens on its own.
///
/// Cloning is cheap and clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use wealthsimple_rs::{AppCredentials, Environment, WealthsimpleClient};
///
/// # async fn example() -> wealthsimple_rs::Result<()> {
/// let credentials = AppCredentials::new("client-id", "client-secret", "https://example.com/cb")?;
/// let client = WealthsimpleClient::new(credentials, Environment::Sandbox)?;
///
/// let tokens = client.token_exchange("auth-code").await?;
/// let accounts = client.accounts().list(&tokens, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WealthsimpleClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: AppCredentials,
    pub(crate) env: Environment,
    pub(crate) base_url: String,
    pub(crate) config: ClientConfig,
}

impl WealthsimpleClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP transport cannot be built.
    pub fn new(credentials: AppCredentials, env: Environment) -> Result<Self> {
        Self::with_config(credentials, env, ClientConfig::default())
    }

    /// Create a client from raw credential strings and an environment name.
    ///
    /// Unrecognized environment names resolve to the sandbox.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] if any credential is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use wealthsimple_rs::{Environment, WealthsimpleClient};
    ///
    /// let client = WealthsimpleClient::from_parts("id", "secret", "https://x/cb", "production")
    ///     .expect("valid credentials");
    /// assert_eq!(client.environment(), Environment::Production);
    ///
    /// assert!(WealthsimpleClient::from_parts("id", "", "https://x/cb", "sandbox").is_err());
    /// ```
    pub fn from_parts(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        env: &str,
    ) -> Result<Self> {
        let credentials = AppCredentials::new(client_id, client_secret, redirect_uri)?;
        Self::new(credentials, Environment::from_name(env))
    }

    /// Create a client with a custom configuration.
    pub fn with_config(
        credentials: AppCredentials,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or_else(|| env.api_base_url())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_url)?;

        let http = config
            .build_http_client()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                env,
                base_url,
                config,
            }),
        })
    }

    /// Check the API status. No authentication is required.
    pub async fn healthcheck(&self) -> Result<HealthStatus> {
        self.inner.fetch(&HEALTHCHECK, None, None).await
    }

    /// Exchange an authorization code for a token pair.
    pub async fn token_exchange(&self, code: &str) -> Result<TokenPair> {
        self.oauth().exchange(code).await
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn token_refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        self.oauth().refresh(refresh_token).await
    }

    /// Return `tokens` unchanged if still valid, otherwise refresh them.
    ///
    /// See [`OAuthService::refresh_if_expired`].
    pub async fn refresh_token_if_expired(&self, tokens: &TokenPair) -> Result<TokenPair> {
        self.oauth().refresh_if_expired(tokens).await
    }

    /// Get the OAuth token service.
    pub fn oauth(&self) -> OAuthService {
        OAuthService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the people service.
    pub fn people(&self) -> PeopleService {
        PeopleService::new(self.inner.clone())
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the daily values service.
    pub fn daily_values(&self) -> DailyValuesService {
        DailyValuesService::new(self.inner.clone())
    }

    /// Get the positions service.
    pub fn positions(&self) -> PositionsService {
        PositionsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the projections service.
    pub fn projections(&self) -> ProjectionsService {
        ProjectionsService::new(self.inner.clone())
    }

    /// Get the bank accounts service.
    pub fn bank_accounts(&self) -> BankAccountsService {
        BankAccountsService::new(self.inner.clone())
    }

    /// Get the deposits service.
    pub fn deposits(&self) -> DepositsService {
        DepositsService::new(self.inner.clone())
    }

    /// Get the environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.env
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Get the application credentials.
    pub fn credentials(&self) -> &AppCredentials {
        &self.inner.credentials
    }
}

impl ClientInner {
    /// Build an outbound request without sending it.
    ///
    /// The bearer token is attached only when present and non-empty; the
    /// query string is omitted when `query` is empty.
    pub(crate) fn build_request<B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        bearer: Option<&str>,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<reqwest::Request> {
        let url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))?;

        let mut builder = self
            .http
            .request(endpoint.method().clone(), url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = bearer.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
        }

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Build, send, and parse a request.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        bearer: Option<&str>,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T> {
        let request = self.build_request(endpoint, bearer, query, body)?;
        debug!(%endpoint, "sending request");

        let response = self.http.execute(request).await?;
        self.handle_response(endpoint, response).await
    }

    /// Make a request without a body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        bearer: Option<&str>,
        query: Option<&QueryParams>,
    ) -> Result<T> {
        self.request::<T, ()>(endpoint, bearer, query, None).await
    }

    /// Make a request with a JSON body.
    pub(crate) async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<T> {
        self.request(endpoint, bearer, None, Some(body)).await
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%endpoint, status = status.as_u16(), "received response");

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(serde_json::from_value(Value::Null)?);
            }
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or_default();
            Err(Error::from_api_response(status.as_u16(), body))
        }
    }
}

impl std::fmt::Debug for WealthsimpleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WealthsimpleClient")
            .field("env", &self.inner.env)
            .field("base_url", &self.inner.base_url)
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
