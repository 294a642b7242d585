//! HTTP client and service layer for the Wealthsimple API.
//!
//! This module provides the main entry point [`WealthsimpleClient`] for
//! interacting with the Wealthsimple API.
//!
//! # Example
//!
//! ```no_run
//! use wealthsimple_rs::{WealthsimpleClient, Environment};
//!
//! # async fn example() -> wealthsimple_rs::Result<()> {
//! let client = WealthsimpleClient::from_parts(
//!     "client-id",
//!     "client-secret",
//!     "https://example.com/oauth/callback",
//!     "sandbox",
//! )?;
//!
//! let health = client.healthcheck().await?;
//! println!("API status: {}", health.status);
//! # Ok(())
//! # }
//! ```

mod config;
pub mod endpoint;
mod http;

pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use http::WealthsimpleClient;
pub(crate) use http::ClientInner;
