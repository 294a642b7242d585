//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different types of IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A Wealthsimple user ID (e.g. `"user-abc123"`).
    UserId
}

string_id! {
    /// A Wealthsimple person ID (e.g. `"person-abc123"`).
    PersonId
}

string_id! {
    /// A Wealthsimple account ID.
    ///
    /// # Example
    ///
    /// ```
    /// use wealthsimple_rs::AccountId;
    ///
    /// let account = AccountId::new("rrsp-qwerty");
    /// println!("Account: {}", account);
    /// ```
    AccountId
}

string_id! {
    /// The funds transfer ID identifying a single deposit.
    FundsTransferId
}

/// Environment configuration for the Wealthsimple API.
///
/// Determines which API host to use. Unrecognized environment names fall
/// back to [`Environment::Sandbox`], so a typo never reaches production.
///
/// # Example
///
/// ```
/// use wealthsimple_rs::Environment;
///
/// assert_eq!(Environment::from_name("production"), Environment::Production);
/// assert_eq!(Environment::from_name("staging"), Environment::Sandbox);
/// println!("API URL: {}", Environment::Sandbox.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment for integration testing.
    #[default]
    Sandbox,
    /// Production environment - real accounts with real money.
    Production,
}

impl Environment {
    /// Resolve an environment from its name.
    ///
    /// Surrounding whitespace is trimmed and case is ignored, so
    /// `" PRODUCTION "` selects production. Anything else, including
    /// abbreviations such as `"prod"`, resolves to the sandbox.
    ///
    /// ```
    /// use wealthsimple_rs::Environment;
    ///
    /// assert_eq!(Environment::from_name(" PRODUCTION "), Environment::Production);
    /// assert_eq!(Environment::from_name("prod"), Environment::Sandbox);
    /// ```
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.wealthsimple.com/v1",
            Environment::Production => "https://api.production.wealthsimple.com/v1",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id() {
        let account = AccountId::new("rrsp-123");
        assert_eq!(account.as_str(), "rrsp-123");
        assert_eq!(account.to_string(), "rrsp-123");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: FundsTransferId = serde_json::from_str("\"funds_transfer-1\"").unwrap();
        assert_eq!(id.as_str(), "funds_transfer-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"funds_transfer-1\"");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.production.wealthsimple.com/v1"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api.sandbox.wealthsimple.com/v1"
        );
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("sandbox"), Environment::Sandbox);
        assert_eq!(Environment::from_name("Production"), Environment::Production);
        assert_eq!(Environment::from("prod"), Environment::Sandbox);
        assert_eq!(Environment::from_name(""), Environment::Sandbox);
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_environment_from_name_trims_and_ignores_case() {
        assert_eq!(Environment::from_name(" PRODUCTION "), Environment::Production);
        assert_eq!(Environment::from_name("\tproduction\n"), Environment::Production);
        assert_eq!(Environment::from_name("pro duction"), Environment::Sandbox);
    }

    #[test]
    fn test_environment_display_round_trips_name() {
        for env in [Environment::Sandbox, Environment::Production] {
            assert_eq!(Environment::from_name(&env.to_string()), env);
        }
    }
}
