//! Database resource handle.

use std::fmt;

use crate::client::Data2RestClient;
use crate::resources::TableResource;

/// A handle identifying one database of the API.
///
/// Borrowing the client, it is cheap to create and holds no connection of its
/// own.
///
/// # Example
///
/// ```rust
/// use data2rest::Data2RestClient;
///
/// let client = Data2RestClient::new("https://api.example.com/api", "key").unwrap();
/// let users = client.database(5).table("users");
/// assert_eq!(users.endpoint(), "https://api.example.com/api/db/5/users");
/// ```
#[derive(Clone, Debug)]
pub struct DatabaseResource<'a> {
    client: &'a Data2RestClient,
    db_id: String,
}

impl<'a> DatabaseResource<'a> {
    pub(crate) const fn new(client: &'a Data2RestClient, db_id: String) -> Self {
        Self { client, db_id }
    }

    /// Returns the database id.
    #[must_use]
    pub fn db_id(&self) -> &str {
        &self.db_id
    }

    /// Returns a handle for a table of this database. No I/O happens.
    #[must_use]
    pub fn table(&self, table_name: impl fmt::Display) -> TableResource<'a> {
        TableResource::new(self.client, self.db_id.clone(), table_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_handle_carries_database_id() {
        let client = Data2RestClient::new("https://api.example.com", "key").unwrap();
        let database = client.database("main");
        let table = database.table("orders");

        assert_eq!(table.db_id(), "main");
        assert_eq!(table.table_name(), "orders");
    }

    #[test]
    fn test_table_handle_outlives_database_handle() {
        let client = Data2RestClient::new("https://api.example.com", "key").unwrap();
        let table = client.database(1).table("users");
        assert_eq!(table.endpoint(), "https://api.example.com/db/1/users");
    }
}
