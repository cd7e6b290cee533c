//! Stream name filtering

use crate::StreamNode;

/// Case-insensitive substring filter over stream names.
///
/// The empty filter matches every stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamFilter {
    raw: String,
    needle: String,
}

impl StreamFilter {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The filter text exactly as typed
    pub fn text(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    pub fn matches(&self, node: &StreamNode) -> bool {
        self.matches_name(&node.stream.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StreamFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches_name(""));
        assert!(filter.matches_name("Users"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let filter = StreamFilter::new("USER");
        assert_eq!(filter.text(), "USER");
        assert!(filter.matches_name("users"));
        assert!(filter.matches_name("SuperUserEvents"));
        assert!(!filter.matches_name("orders"));
    }
}
