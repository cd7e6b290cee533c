//! Stream descriptors and per-stream sync configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the source reads a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    #[default]
    FullRefresh,
    Incremental,
}

impl SyncMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FullRefresh => "Full refresh",
            Self::Incremental => "Incremental",
        }
    }
}

/// How the destination writes synced records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationSyncMode {
    #[default]
    Append,
    Overwrite,
    AppendDedup,
}

impl DestinationSyncMode {
    pub fn all() -> &'static [Self] {
        &[Self::Append, Self::Overwrite, Self::AppendDedup]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Append => "Append",
            Self::Overwrite => "Overwrite",
            Self::AppendDedup => "Deduped + history",
        }
    }
}

/// Identity of a stream within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId {
    pub namespace: Option<String>,
    pub name: String,
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}.{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Immutable description of a syncable source entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// JSON Schema object describing the stream's records
    #[serde(default)]
    pub json_schema: serde_json::Value,
    #[serde(default)]
    pub supported_sync_modes: Vec<SyncMode>,
    #[serde(default)]
    pub source_defined_cursor: bool,
    #[serde(default)]
    pub default_cursor_field: Vec<String>,
    #[serde(default)]
    pub source_defined_primary_key: Vec<Vec<String>>,
}

impl Stream {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            json_schema: serde_json::Value::Null,
            supported_sync_modes: vec![SyncMode::FullRefresh],
            source_defined_cursor: false,
            default_cursor_field: Vec::new(),
            source_defined_primary_key: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_json_schema(mut self, json_schema: serde_json::Value) -> Self {
        self.json_schema = json_schema;
        self
    }

    pub fn with_supported_sync_modes(mut self, modes: Vec<SyncMode>) -> Self {
        self.supported_sync_modes = modes;
        self
    }

    pub fn id(&self) -> StreamId {
        StreamId {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }
}

/// Mutable per-stream sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub sync_mode: SyncMode,
    pub cursor_field: Vec<String>,
    pub destination_sync_mode: DestinationSyncMode,
    pub primary_key: Vec<Vec<String>>,
    /// Cleaned name used for the destination table
    pub alias_name: String,
    pub selected: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            sync_mode: SyncMode::default(),
            cursor_field: Vec::new(),
            destination_sync_mode: DestinationSyncMode::default(),
            primary_key: Vec::new(),
            alias_name: String::new(),
            selected: false,
        }
    }
}

impl StreamConfig {
    /// Primary key paths as shown in the schema table, e.g. `id, account.id`
    pub fn primary_key_display(&self) -> String {
        self.primary_key
            .iter()
            .map(|path| path.join("."))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn cursor_field_display(&self) -> String {
        self.cursor_field.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_id_display() {
        let stream = Stream::new("users").with_namespace("public");
        assert_eq!(stream.id().to_string(), "public.users");
        assert_eq!(Stream::new("users").id().to_string(), "users");
    }

    #[test]
    fn test_sync_mode_wire_names() {
        let json = serde_json::to_string(&DestinationSyncMode::AppendDedup).unwrap();
        assert_eq!(json, "\"append_dedup\"");
        let mode: SyncMode = serde_json::from_str("\"full_refresh\"").unwrap();
        assert_eq!(mode, SyncMode::FullRefresh);
    }

    #[test]
    fn test_config_display_helpers() {
        let config = StreamConfig {
            primary_key: vec![vec!["id".into()], vec!["account".into(), "id".into()]],
            cursor_field: vec!["meta".into(), "updated_at".into()],
            ..Default::default()
        };
        assert_eq!(config.primary_key_display(), "id, account.id");
        assert_eq!(config.cursor_field_display(), "meta.updated_at");
    }
}
