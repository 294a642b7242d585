//! Endpoint descriptors: an HTTP method paired with a path.

use std::borrow::Cow;
use std::fmt;

use reqwest::Method;

use crate::{Error, Result};

/// A single API operation, identified by method and path.
///
/// Static endpoints are `const` values; endpoints with an id in the path are
/// built per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: Cow<'static, str>,
}

impl Endpoint {
    /// Build an endpoint from a method and a path relative to the API host.
    pub fn new(method: Method, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// An endpoint addressing one resource in a collection, e.g.
    /// `/accounts/{id}`.
    ///
    /// The id is percent-encoded as a single path segment, so `/`, `?` and
    /// `#` cannot leave the collection. Ids that are empty or a dot segment
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for `""`, `"."` and `".."`.
    pub fn resource(method: Method, collection: &'static str, id: &str) -> Result<Self> {
        if matches!(id, "" | "." | "..") {
            return Err(Error::InvalidInput(format!(
                "invalid resource id {:?} for {}",
                id, collection
            )));
        }
        Ok(Self::new(
            method,
            format!("{}/{}", collection, urlencoding::encode(id)),
        ))
    }

    /// A `GET` endpoint with a fixed path.
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path: Cow::Borrowed(path),
        }
    }

    /// A `POST` endpoint with a fixed path.
    pub const fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path: Cow::Borrowed(path),
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path, starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// `GET /healthcheck`
pub const HEALTHCHECK: Endpoint = Endpoint::get("/healthcheck");

/// `POST /oauth/token`
pub const OAUTH_TOKEN: Endpoint = Endpoint::post("/oauth/token");
