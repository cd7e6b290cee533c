//! Sync mode combinations available to a stream

use crate::{DestinationSyncMode, StreamNode, SyncMode};

/// A (source mode, destination mode) pair offered in the sync settings column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncModeOption {
    pub sync_mode: SyncMode,
    pub destination_sync_mode: DestinationSyncMode,
}

impl SyncModeOption {
    pub fn display_name(&self) -> String {
        format!(
            "{} | {}",
            self.sync_mode.display_name(),
            self.destination_sync_mode.display_name()
        )
    }

    /// Whether the pair is a combination a connection can run
    pub fn is_supported(&self) -> bool {
        !matches!(
            (self.sync_mode, self.destination_sync_mode),
            (SyncMode::FullRefresh, DestinationSyncMode::AppendDedup)
                | (SyncMode::Incremental, DestinationSyncMode::Overwrite)
        )
    }

    pub fn of(node: &StreamNode) -> Self {
        Self {
            sync_mode: node.config.sync_mode,
            destination_sync_mode: node.config.destination_sync_mode,
        }
    }
}

/// Options for `node` given what the destination supports. Deduplication is
/// only offered together with incremental reads, overwrite only together with
/// full refresh.
pub fn sync_mode_options(
    node: &StreamNode,
    destination_modes: &[DestinationSyncMode],
) -> Vec<SyncModeOption> {
    node.stream
        .supported_sync_modes
        .iter()
        .flat_map(|sync_mode| {
            destination_modes
                .iter()
                .map(move |destination_sync_mode| SyncModeOption {
                    sync_mode: *sync_mode,
                    destination_sync_mode: *destination_sync_mode,
                })
        })
        .filter(SyncModeOption::is_supported)
        .collect()
}

/// Copy of `node` configured with `option`, filling in the source-defined
/// cursor and primary key when the new mode needs them and none is set.
pub fn apply_sync_mode_option(node: &StreamNode, option: SyncModeOption) -> StreamNode {
    let mut next = node.clone();
    next.config.sync_mode = option.sync_mode;
    next.config.destination_sync_mode = option.destination_sync_mode;

    if option.sync_mode == SyncMode::Incremental
        && next.config.cursor_field.is_empty()
        && next.stream.source_defined_cursor
    {
        next.config.cursor_field = next.stream.default_cursor_field.clone();
    }

    if option.destination_sync_mode == DestinationSyncMode::AppendDedup
        && next.config.primary_key.is_empty()
    {
        next.config.primary_key = next.stream.source_defined_primary_key.clone();
    }

    next
}

/// Copy of `node` moved to the option after its current one, wrapping around.
/// A node whose current pair is not offered moves to the first option.
pub fn cycle_sync_mode(node: &StreamNode, destination_modes: &[DestinationSyncMode]) -> StreamNode {
    let options = sync_mode_options(node, destination_modes);
    if options.is_empty() {
        return node.clone();
    }

    let current = SyncModeOption::of(node);
    let next = match options.iter().position(|option| *option == current) {
        Some(index) => options[(index + 1) % options.len()],
        None => options[0],
    };
    apply_sync_mode_option(node, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Stream, StreamConfig};
    use pretty_assertions::assert_eq;

    fn incremental_node() -> StreamNode {
        let mut stream = Stream::new("events")
            .with_supported_sync_modes(vec![SyncMode::FullRefresh, SyncMode::Incremental]);
        stream.source_defined_cursor = true;
        stream.default_cursor_field = vec!["updated_at".into()];
        stream.source_defined_primary_key = vec![vec!["id".into()]];
        StreamNode::new(stream, StreamConfig::default())
    }

    #[test]
    fn test_options_exclude_full_refresh_dedup() {
        let options = sync_mode_options(&incremental_node(), DestinationSyncMode::all());
        let pairs: Vec<_> = options
            .iter()
            .map(|o| (o.sync_mode, o.destination_sync_mode))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (SyncMode::FullRefresh, DestinationSyncMode::Append),
                (SyncMode::FullRefresh, DestinationSyncMode::Overwrite),
                (SyncMode::Incremental, DestinationSyncMode::Append),
                (SyncMode::Incremental, DestinationSyncMode::AppendDedup),
            ]
        );
    }

    #[test]
    fn test_cycle_fills_source_defined_cursor_and_key() {
        let node = incremental_node();
        let modes = DestinationSyncMode::all();

        let second = cycle_sync_mode(&node, modes);
        assert_eq!(second.config.destination_sync_mode, DestinationSyncMode::Overwrite);

        let third = cycle_sync_mode(&second, modes);
        assert_eq!(third.config.sync_mode, SyncMode::Incremental);
        assert_eq!(third.config.cursor_field, vec!["updated_at"]);
        assert!(third.config.primary_key.is_empty());

        let fourth = cycle_sync_mode(&third, modes);
        assert_eq!(fourth.config.destination_sync_mode, DestinationSyncMode::AppendDedup);
        assert_eq!(fourth.config.primary_key, vec![vec!["id".to_string()]]);

        let wrapped = cycle_sync_mode(&fourth, modes);
        assert_eq!(SyncModeOption::of(&wrapped), sync_mode_options(&node, modes)[0]);
    }

    #[test]
    fn test_incremental_overwrite_is_never_offered() {
        let node = incremental_node();
        let options = sync_mode_options(&node, &[DestinationSyncMode::Overwrite]);
        assert_eq!(
            options,
            vec![SyncModeOption {
                sync_mode: SyncMode::FullRefresh,
                destination_sync_mode: DestinationSyncMode::Overwrite,
            }]
        );

        let mut incremental = node.clone();
        incremental.config.sync_mode = SyncMode::Incremental;
        let moved = cycle_sync_mode(&incremental, &[DestinationSyncMode::Overwrite]);
        assert_eq!(moved.config.sync_mode, SyncMode::FullRefresh);
    }

    #[test]
    fn test_cycle_unlisted_and_empty() {
        let mut node = incremental_node();
        node.config.destination_sync_mode = DestinationSyncMode::AppendDedup;
        let moved = cycle_sync_mode(&node, &[DestinationSyncMode::Overwrite]);
        assert_eq!(moved.config.destination_sync_mode, DestinationSyncMode::Overwrite);
        assert_eq!(moved.config.sync_mode, SyncMode::FullRefresh);

        assert_eq!(cycle_sync_mode(&node, &[]), node);
    }
}
