//! Syncform Schema View
//!
//! The stream selection section of the connection form:
//!
//! ```text
//! Data sync  [additional control]
//! [search | check all]  Namespace  Data type  Cleaned name  Primary key  Cursor field  Sync settings
//! ┌──────────────────────────────────────────────────────────────────────────────────────────┐
//! │ StreamTreeView (one row per matching stream, expandable into fields)                     │
//! └──────────────────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The parent owns the `SyncSchema`. Views never apply their own edits: every
//! edit is emitted as a complete replacement schema and the parent pushes it
//! back with `SchemaView::set_schema`.

mod schema_view;
mod search;
mod selection;
mod tree_view;

pub use schema_view::{SchemaView, SchemaViewEvent, SchemaViewOptions};
pub use search::{SchemaSearch, SearchEvent};
pub use selection::SchemaSelection;
pub use tree_view::{StreamTreeView, TreeViewEvent};
