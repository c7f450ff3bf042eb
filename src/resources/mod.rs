//! Resource handles for the database → table → record hierarchy.
//!
//! Handles are lightweight values that compose URLs and borrow the client's
//! session; they never own a connection.
//!
//! - [`DatabaseResource`]: a database, identified by id
//! - [`TableResource`]: a table of a database, with CRUD and bulk operations
//! - [`RecordPage`]: the decoded collection envelope returned by `list`

mod database;
mod page;
mod table;

pub use database::DatabaseResource;
pub use page::{PageMetadata, RecordPage};
pub use table::TableResource;
