//! # wealthsimple-rs
//!
//! An async Rust client for the Wealthsimple REST API.
//!
//! The crate wraps OAuth2 token exchange and refresh plus the API's resource
//! endpoints behind a client bound to one application's credentials and one
//! environment.
//!
//! ## Features
//!
//! - **Authentication**: authorization-code exchange, refresh, and an
//!   expiry-aware refresh helper
//! - **Resources**: users, people, accounts, daily values, positions,
//!   transactions, projections, bank accounts, and deposits
//! - **Passthrough payloads**: request and response bodies are plain JSON
//! - **Async-first**: built on `reqwest`, usable from any Tokio runtime
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wealthsimple_rs::{AppCredentials, Environment, QueryParams, WealthsimpleClient};
//!
//! #[tokio::main]
//! async fn main() -> wealthsimple_rs::Result<()> {
//!     let credentials = AppCredentials::new(
//!         "client-id",
//!         "client-secret",
//!         "https://example.com/oauth/callback",
//!     )?;
//!     let client = WealthsimpleClient::new(credentials, Environment::Sandbox)?;
//!
//!     // Exchange the code from the OAuth redirect
//!     let tokens = client.token_exchange("auth-code").await?;
//!
//!     // Refresh if needed, then call the API
//!     let tokens = client.refresh_token_if_expired(&tokens).await?;
//!     let accounts = client
//!         .accounts()
//!         .list(&tokens, Some(&QueryParams::new().limit(10)))
//!         .await?;
//!     println!("{}", accounts);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{AppCredentials, TokenPair};
pub use client::{ClientConfig, Endpoint, WealthsimpleClient};
pub use error::{Error, Result};
pub use models::{
    AccountId, Environment, FundsTransferId, HealthStatus, PersonId, QueryParams, UserId,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use wealthsimple_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AppCredentials, OAuthService, TokenPair};
    pub use crate::client::{ClientConfig, WealthsimpleClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccountId, Environment, FundsTransferId, HealthStatus, PersonId, QueryParams, UserId,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let credentials = AppCredentials::new("id", "secret", "https://example.com/cb").unwrap();
        let client = WealthsimpleClient::new(credentials, Environment::Sandbox).unwrap();
        assert_eq!(client.credentials().client_id(), "id");
        assert_eq!(client.environment(), Environment::Sandbox);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<WealthsimpleClient>();
        assert_send_sync::<AppCredentials>();
    }
}
