//! The collection envelope returned by `GET /db/{db}/{table}`.

use serde::{Deserialize, Serialize};

/// Counters the server attaches to a collection response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Number of records matching the filters, ignoring the page window.
    #[serde(default)]
    pub total_records: u64,
    /// The page size the server applied.
    #[serde(default)]
    pub limit: u64,
    /// The offset the server applied.
    #[serde(default)]
    pub offset: u64,
    /// Number of records in this page.
    #[serde(default)]
    pub count: u64,
}

/// One page of records, as returned by [`TableResource::list`](crate::TableResource::list).
///
/// `T` defaults to raw JSON; any `Deserialize` record type can be used.
///
/// # Example
///
/// ```rust
/// use data2rest::RecordPage;
/// use serde_json::json;
///
/// let body = json!({
///     "metadata": {"total_records": 1, "limit": 50, "offset": 0, "count": 1},
///     "data": [{"id": 1, "name": "Ann"}]
/// });
///
/// let page: RecordPage = serde_json::from_value(body).unwrap();
/// assert_eq!(page.metadata.total_records, 1);
/// assert_eq!(page.data[0]["name"], "Ann");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordPage<T = serde_json::Value> {
    /// Page counters. Missing metadata deserializes as all zeros.
    #[serde(default)]
    pub metadata: PageMetadata,
    /// The records of this page.
    pub data: Vec<T>,
}
