//! Query parameters for list and filter endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

/// A flat set of query-string parameters.
///
/// Keys map to scalar values which are stringified on insert. Pagination
/// and filtering on the Wealthsimple API are plain query parameters, so this
/// type carries them through untouched; the helpers only name the common ones.
///
/// # Example
///
/// ```
/// use wealthsimple_rs::QueryParams;
///
/// let query = QueryParams::new()
///     .account_id("rrsp-qwerty")
///     .limit(25)
///     .insert("sort", "desc");
/// assert_eq!(query.get("limit"), Some("25"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the key.
    pub fn insert(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Maximum number of results per page.
    pub fn limit(self, limit: u32) -> Self {
        self.insert("limit", limit)
    }

    /// Number of results to skip.
    pub fn offset(self, offset: u32) -> Self {
        self.insert("offset", offset)
    }

    /// Restrict results to one account.
    pub fn account_id(self, account_id: impl AsRef<str>) -> Self {
        self.insert("account_id", account_id.as_ref())
    }

    /// Start of a date range (`YYYY-MM-DD`).
    pub fn start_date(self, date: impl AsRef<str>) -> Self {
        self.insert("start_date", date.as_ref())
    }

    /// End of a date range (`YYYY-MM-DD`).
    pub fn end_date(self, date: impl AsRef<str>) -> Self {
        self.insert("end_date", date.as_ref())
    }

    /// Only resources created after this timestamp.
    pub fn created_after(self, timestamp: impl AsRef<str>) -> Self {
        self.insert("created_after", timestamp.as_ref())
    }

    /// Only resources created before this timestamp.
    pub fn created_before(self, timestamp: impl AsRef<str>) -> Self {
        self.insert("created_before", timestamp.as_ref())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |query, (k, v)| query.insert(k, v))
    }
}
