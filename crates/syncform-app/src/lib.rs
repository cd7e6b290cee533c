//! Syncform - Connection form application
//!
//! Hosts the schema view inside a connection form window. The form owns the
//! sync schema and applies every replacement the schema view emits.

mod catalog_source;
mod connection_form;
pub mod logging;
mod toolbar;

pub use catalog_source::{CATALOG_ENV_VAR, CatalogSource};
pub use connection_form::ConnectionForm;
pub use toolbar::{SchemaToolbar, ToolbarEvent};
