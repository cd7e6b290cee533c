//! Search and selection state behind the schema view

use syncform_catalog::{StreamFilter, SyncSchema};

/// The schema last pushed by the parent, the search text, and the derived
/// "has selected item" flag.
///
/// The flag is recomputed only when the stream list or the search text
/// actually changes.
#[derive(Debug, Clone, Default)]
pub struct SchemaSelection {
    schema: SyncSchema,
    filter: StreamFilter,
    has_selected_item: bool,
}

impl SchemaSelection {
    pub fn new(schema: SyncSchema) -> Self {
        let filter = StreamFilter::default();
        let has_selected_item = schema.has_selected_item(&filter);
        Self {
            schema,
            filter,
            has_selected_item,
        }
    }

    pub fn schema(&self) -> &SyncSchema {
        &self.schema
    }

    pub fn filter(&self) -> &StreamFilter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        self.filter.text()
    }

    pub fn has_selected_item(&self) -> bool {
        self.has_selected_item
    }

    /// Returns true if the stored schema changed
    pub fn set_schema(&mut self, schema: SyncSchema) -> bool {
        if schema == self.schema {
            return false;
        }
        self.schema = schema;
        self.recompute();
        true
    }

    /// Returns true if the search text changed
    pub fn set_search(&mut self, search: &str) -> bool {
        if search == self.filter.text() {
            return false;
        }
        self.filter = StreamFilter::new(search);
        self.recompute();
        true
    }

    /// The replacement schema for a "check all" request. The stored schema is
    /// left as is until the owner pushes the replacement back.
    pub fn check_all(&self) -> SyncSchema {
        self.schema.check_all(&self.filter)
    }

    fn recompute(&mut self) {
        self.has_selected_item = self.schema.has_selected_item(&self.filter);
    }
}
