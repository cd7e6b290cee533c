//! Field tree derived from a stream's JSON schema

use crate::Stream;
use serde_json::Value;

/// One field of a stream, possibly with nested fields for objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSchemaField {
    pub name: String,
    pub clean_name: String,
    /// Dot-joined path from the stream root
    pub key: String,
    pub path: Vec<String>,
    pub data_type: String,
    pub fields: Option<Vec<SyncSchemaField>>,
}

impl SyncSchemaField {
    pub fn is_object(&self) -> bool {
        self.fields.is_some()
    }
}

/// Builds the field tree for `stream` from its `json_schema.properties`
pub fn stream_fields(stream: &Stream) -> Vec<SyncSchemaField> {
    fields_at(&stream.json_schema, &[])
}

fn fields_at(schema: &Value, parent: &[String]) -> Vec<SyncSchemaField> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| {
            let mut path = parent.to_vec();
            path.push(name.clone());
            let fields = property
                .get("properties")
                .filter(|p| p.is_object())
                .map(|_| fields_at(property, &path));

            SyncSchemaField {
                name: name.clone(),
                clean_name: clean_name(name),
                key: path.join("."),
                data_type: data_type(property),
                path,
                fields,
            }
        })
        .collect()
}

/// JSON type of a property. For `["null", "string"]` style unions the first
/// non-null entry wins.
fn data_type(property: &Value) -> String {
    match property.get("type") {
        Some(Value::String(ty)) => ty.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null")
            .unwrap_or("null")
            .to_string(),
        _ if property.get("properties").is_some() => "object".to_string(),
        _ => String::new(),
    }
}

/// Destination-safe version of a field name
pub fn clean_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Depth-first flattening of a field tree into `(depth, field)` rows
pub fn flatten_fields(fields: &[SyncSchemaField]) -> Vec<(usize, &SyncSchemaField)> {
    fn walk<'a>(
        fields: &'a [SyncSchemaField],
        depth: usize,
        out: &mut Vec<(usize, &'a SyncSchemaField)>,
    ) {
        for field in fields {
            out.push((depth, field));
            if let Some(children) = &field.fields {
                walk(children, depth + 1, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(fields, 0, &mut out);
    out
}
