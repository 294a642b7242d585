//! OAuth application credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// The OAuth application registered with Wealthsimple.
///
/// All three fields are required and must be non-blank; this is checked
/// once, when the value is built, so a client can never be constructed from
/// incomplete credentials. Deserializing goes through the same check.
///
/// # Example
///
/// ```
/// use wealthsimple_rs::AppCredentials;
///
/// let credentials = AppCredentials::new(
///     "client-id",
///     "client-secret",
///     "https://example.com/oauth/callback",
/// ).expect("all fields present");
/// assert_eq!(credentials.client_id(), "client-id");
///
/// assert!(AppCredentials::new("client-id", "", "https://example.com").is_err());
/// ```
#[derive(Clone, Deserialize)]
#[serde(try_from = "RawCredentials")]
pub struct AppCredentials {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
}

impl AppCredentials {
    /// Validate and build a set of credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] naming the first missing field.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        let client_id = required("client_id", client_id.into())?;
        let client_secret = required("client_secret", client_secret.into())?;
        let redirect_uri = required("redirect_uri", redirect_uri.into())?;

        Ok(Self {
            client_id,
            client_secret: SecretString::from(client_secret),
            redirect_uri,
        })
    }

    /// The OAuth client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The OAuth client secret.
    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    /// The redirect URI registered for the application.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub(crate) fn expose_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidCredentials(format!(
            "{} must be a non-empty string",
            field
        )));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct RawCredentials {
    #[serde(default)]
    client_id: String,
    #[serde(default)]
    client_secret: String,
    #[serde(default)]
    redirect_uri: String,
}

impl TryFrom<RawCredentials> for AppCredentials {
    type Error = Error;

    fn try_from(raw: RawCredentials) -> Result<Self> {
        Self::new(raw.client_id, raw.client_secret, raw.redirect_uri)
    }
}

impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let creds = AppCredentials::new("id", "secret", "https://example.com/cb").unwrap();
        assert_eq!(creds.client_id(), "id");
        assert_eq!(creds.client_secret().expose_secret(), "secret");
        assert_eq!(creds.redirect_uri(), "https://example.com/cb");
    }

    #[test]
    fn test_each_field_required() {
        let cases = [
            ("", "secret", "uri", "client_id"),
            ("id", "", "uri", "client_secret"),
            ("id", "secret", "   ", "redirect_uri"),
        ];
        for (id, secret, uri, field) in cases {
            match AppCredentials::new(id, secret, uri) {
                Err(Error::InvalidCredentials(msg)) => assert!(msg.contains(field), "{}", msg),
                other => panic!("Expected InvalidCredentials for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let creds: AppCredentials = serde_json::from_str(
            r#"{"client_id":"id","client_secret":"secret","redirect_uri":"https://x"}"#,
        )
        .unwrap();
        assert_eq!(creds.client_id(), "id");

        let missing = serde_json::from_str::<AppCredentials>(r#"{"client_id":"id"}"#);
        assert!(missing.is_err());

        let wrong_type = serde_json::from_str::<AppCredentials>(
            r#"{"client_id":1,"client_secret":"s","redirect_uri":"u"}"#,
        );
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = AppCredentials::new("id", "super-secret", "uri").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("REDACTED"));
    }
}
