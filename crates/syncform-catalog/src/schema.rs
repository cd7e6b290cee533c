//! Sync schema: the ordered stream list of a connection

use crate::{CatalogError, Result, Stream, StreamConfig, StreamFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A stream paired with its sync configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamNode {
    pub stream: Stream,
    #[serde(default)]
    pub config: StreamConfig,
}

impl StreamNode {
    pub fn new(stream: Stream, config: StreamConfig) -> Self {
        Self { stream, config }
    }

    /// Copy of this node with `config.selected` replaced
    pub fn with_selected(&self, selected: bool) -> Self {
        Self {
            stream: self.stream.clone(),
            config: StreamConfig {
                selected,
                ..self.config.clone()
            },
        }
    }
}

/// Ordered collection of stream nodes. Order is display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncSchema {
    pub streams: Vec<StreamNode>,
}

impl SyncSchema {
    pub fn new(streams: Vec<StreamNode>) -> Self {
        Self { streams }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let schema = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            streams = schema.streams.len(),
            "Loaded sync schema"
        );
        Ok(schema)
    }

    /// Rejects catalogs where two streams share a namespace and name
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for node in &self.streams {
            let id = node.stream.id();
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateStream(id.to_string()));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn matching<'a>(
        &'a self,
        filter: &'a StreamFilter,
    ) -> impl Iterator<Item = (usize, &'a StreamNode)> + 'a {
        self.streams
            .iter()
            .enumerate()
            .filter(move |(_, node)| filter.matches(node))
    }

    /// True if any stream matching `filter` is selected
    pub fn has_selected_item(&self, filter: &StreamFilter) -> bool {
        self.streams
            .iter()
            .any(|node| node.config.selected && filter.matches(node))
    }

    /// New schema where every stream matching `filter` has `selected = target`.
    /// Streams outside the filter are carried over untouched.
    pub fn with_matching_selected(&self, filter: &StreamFilter, target: bool) -> Self {
        let streams = self
            .streams
            .iter()
            .map(|node| {
                if filter.matches(node) {
                    node.with_selected(target)
                } else {
                    node.clone()
                }
            })
            .collect();
        Self { streams }
    }

    /// Selects every matching stream when none of them is selected, otherwise
    /// deselects every matching stream.
    pub fn check_all(&self, filter: &StreamFilter) -> Self {
        let target = !self.has_selected_item(filter);
        tracing::debug!(
            search = filter.text(),
            target,
            matched = self.matching(filter).count(),
            "Check all streams"
        );
        self.with_matching_selected(filter, target)
    }

    /// New schema with the node at `index` replaced. Out of range leaves the
    /// schema unchanged.
    pub fn with_node(&self, index: usize, node: StreamNode) -> Self {
        let mut streams = self.streams.clone();
        if let Some(slot) = streams.get_mut(index) {
            *slot = node;
        }
        Self { streams }
    }

    pub fn with_selection_toggled(&self, index: usize) -> Self {
        match self.streams.get(index) {
            Some(node) => self.with_node(index, node.with_selected(!node.config.selected)),
            None => self.clone(),
        }
    }
}
