//! OAuth authentication for the Wealthsimple API.
//!
//! Wealthsimple uses the OAuth2 authorization-code flow. An application is
//! identified by its [`AppCredentials`]; a user's authorization code is
//! exchanged for a [`TokenPair`], and the refresh token in that pair is used
//! to obtain a new one once the access token expires.
//!
//! This crate does not persist tokens. Callers store the pair and check it
//! with [`OAuthService::refresh_if_expired`] before making API calls.
//!
//! ```no_run
//! use wealthsimple_rs::{AppCredentials, Environment, WealthsimpleClient};
//!
//! # async fn example(stored: wealthsimple_rs::TokenPair) -> wealthsimple_rs::Result<()> {
//! let credentials = AppCredentials::new("client-id", "client-secret", "https://example.com/cb")?;
//! let client = WealthsimpleClient::new(credentials, Environment::Sandbox)?;
//!
//! let tokens = client.refresh_token_if_expired(&stored).await?;
//! let user = client.users().list(&tokens, None).await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod oauth;
mod token;

pub use credentials::AppCredentials;
pub use oauth::OAuthService;
pub use token::TokenPair;
