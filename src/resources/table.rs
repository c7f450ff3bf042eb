//! Table resource handle: CRUD and bulk operations on one table.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Data2RestClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest, Query};
use crate::resources::RecordPage;

/// Body of a bulk request: `{"operations": [...]}`.
#[derive(Serialize)]
struct BulkRequest<'a, T> {
    operations: &'a [T],
}

/// A handle identifying one table of one database.
///
/// Every operation issues exactly one request through the client's shared
/// session and returns the parsed JSON body unchanged, whatever its shape.
/// Operations are independent of each other.
///
/// | Operation | Request |
/// |-----------|---------|
/// | [`get`](Self::get) | `GET {endpoint}?{query}` |
/// | [`find`](Self::find) | `GET {endpoint}/{id}` |
/// | [`create`](Self::create) | `POST {endpoint}` |
/// | [`update`](Self::update) | `PUT {endpoint}/{id}` |
/// | [`delete`](Self::delete) | `DELETE {endpoint}/{id}` |
/// | [`bulk`](Self::bulk) | `POST {endpoint}/bulk` |
///
/// # Example
///
/// ```rust,ignore
/// use data2rest::{Data2RestClient, Query};
/// use serde_json::json;
///
/// let client = Data2RestClient::new("https://api.example.com/api", "key")?;
/// let users = client.database(5).table("users");
///
/// let found = users.get(&Query::new().limit(10).param("name__like", "A%")).await?;
/// let created = users.create(&json!({"name": "Bob"})).await?;
/// users.delete(43).await?;
/// ```
#[derive(Clone, Debug)]
pub struct TableResource<'a> {
    client: &'a Data2RestClient,
    db_id: String,
    table_name: String,
    /// Path relative to the base URL: `/db/{db_id}/{table_name}`.
    path: String,
}

impl<'a> TableResource<'a> {
    pub(crate) fn new(client: &'a Data2RestClient, db_id: String, table_name: String) -> Self {
        let path = format!("/db/{db_id}/{table_name}");
        Self {
            client,
            db_id,
            table_name,
            path,
        }
    }

    /// Returns the database id.
    #[must_use]
    pub fn db_id(&self) -> &str {
        &self.db_id
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns the collection URL: `{base_url}/db/{db_id}/{table_name}`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.client.base_url().join(&self.path)
    }

    /// Returns the URL of a single record.
    #[must_use]
    pub fn record_endpoint(&self, record_id: impl fmt::Display) -> String {
        self.client.base_url().join(&self.record_path(record_id))
    }

    fn record_path(&self, record_id: impl fmt::Display) -> String {
        format!("{}/{record_id}", self.path)
    }

    /// Fetches records, forwarding `query` verbatim as the query string.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn get(&self, query: &Query) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.path.as_str())
            .query(query.clone())
            .build()?;
        self.client.http_client().request(request).await
    }

    /// Fetches records and decodes the `{"metadata", "data"}` envelope.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`HttpError::Deserialize`] when the
    /// body is not a record page of `T`.
    pub async fn list<T: DeserializeOwned>(
        &self,
        query: &Query,
    ) -> Result<RecordPage<T>, HttpError> {
        let body = self.get(query).await?;
        serde_json::from_value(body).map_err(HttpError::Deserialize)
    }

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for non-2xx responses, including 404 when
    /// the record does not exist.
    pub async fn find(&self, record_id: impl fmt::Display) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.record_path(record_id)).build()?;
        self.client.http_client().request(request).await
    }

    /// Creates a record from `data`, sent as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `data` cannot be serialized,
    /// otherwise as [`get`](Self::get).
    pub async fn create<T>(&self, data: &T) -> Result<serde_json::Value, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data).map_err(HttpError::Serialize)?;
        let request = HttpRequest::builder(HttpMethod::Post, self.path.as_str())
            .body(body)
            .build()?;
        self.client.http_client().request(request).await
    }

    /// Updates a record with `data`, sent as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `data` cannot be serialized,
    /// otherwise as [`get`](Self::get).
    pub async fn update<T>(
        &self,
        record_id: impl fmt::Display,
        data: &T,
    ) -> Result<serde_json::Value, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data).map_err(HttpError::Serialize)?;
        let request = HttpRequest::builder(HttpMethod::Put, self.record_path(record_id))
            .body(body)
            .build()?;
        self.client.http_client().request(request).await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for non-2xx responses and
    /// [`HttpError::Network`] for transport failures.
    pub async fn delete(&self, record_id: impl fmt::Display) -> Result<serde_json::Value, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, self.record_path(record_id)).build()?;
        self.client.http_client().request(request).await
    }

    /// Sends an ordered list of operation descriptors in one request.
    ///
    /// The body is `{"operations": [...]}`; the descriptors are opaque to the
    /// SDK and executed by the server in order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if an operation cannot be serialized,
    /// otherwise as [`get`](Self::get).
    pub async fn bulk<T: Serialize>(&self, operations: &[T]) -> Result<serde_json::Value, HttpError> {
        let body = serde_json::to_value(BulkRequest { operations }).map_err(HttpError::Serialize)?;
        let request = HttpRequest::builder(HttpMethod::Post, format!("{}/bulk", self.path))
            .body(body)
            .build()?;
        self.client.http_client().request(request).await
    }
}
