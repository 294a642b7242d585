//! Data models for the Wealthsimple API.
//!
//! Resource payloads (users, accounts, deposits, ...) are defined by the
//! upstream API and passed through as [`serde_json::Value`]. The types here
//! cover what the client itself has to understand:
//!
//! - [`primitives`] - Identifiers and the [`Environment`]
//! - [`query`] - Query-string parameters for list endpoints
//! - [`health`] - The healthcheck response

pub mod health;
pub mod primitives;
pub mod query;

pub use health::*;
pub use primitives::*;
pub use query::*;
