//! Query parameters for collection requests.
//!
//! A [`Query`] is an ordered, open string-keyed mapping that is forwarded
//! verbatim as the query string of a `get` request. The SDK assigns no
//! meaning to the keys; the server interprets them:
//!
//! - `limit` / `offset`: page window (server defaults are 50 and 0)
//! - `fields`: comma-separated list of columns to return
//! - `sort`: sort expression, such as `-id`
//! - any column name: equality filter, or a `LIKE` match when the value
//!   contains `%`
//! - operator suffixes such as `name__like`, passed through untouched

use std::collections::HashMap;

/// Ordered query parameters for [`TableResource::get`](crate::TableResource::get).
///
/// Setting a key that is already present replaces its value in place, so the
/// first insertion decides the parameter's position in the query string.
///
/// # Example
///
/// ```rust
/// use data2rest::Query;
///
/// let query = Query::new()
///     .limit(10)
///     .sort("-id")
///     .param("name__like", "Test%");
///
/// assert_eq!(query.get("limit"), Some("10"));
/// assert_eq!(query.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Sets an arbitrary parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the maximum number of records to return.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    /// Sets the number of records to skip.
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    /// Sets the sort expression (e.g., `-id` for descending id).
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.param("sort", sort.into())
    }

    /// Restricts the returned columns.
    #[must_use]
    pub fn fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.param("fields", fields)
    }

    /// Filters on a column value. A `%` in the value makes it a `LIKE` match.
    #[must_use]
    pub fn filter(self, column: impl Into<String>, value: impl ToString) -> Self {
        self.param(column, value)
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the parameters as pairs for the query-string encoder.
    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.params
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// HashMap iteration order is unspecified, so the resulting order is too.
impl From<HashMap<String, String>> for Query {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
