//! Syncform Catalog - Stream catalog model for the connection form
//!
//! This crate holds the data the schema view renders and edits:
//!
//! - `SyncSchema` - Ordered list of stream nodes for one connection
//! - `Stream` / `StreamConfig` - Source description and per-stream sync settings
//! - `StreamFilter` - Case-insensitive name filter shared by the search box and tree
//! - `SyncModeOption` - Valid (source mode, destination mode) pairs for a stream
//! - `SyncSchemaField` - Field tree derived from a stream's JSON schema

mod error;
mod fields;
mod filter;
mod schema;
mod stream;
mod sync_modes;

pub use error::*;
pub use fields::*;
pub use filter::*;
pub use schema::*;
pub use stream::*;
pub use sync_modes::*;
