//! Stream tree: one row per matching stream, expandable into its fields

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme, Theme, checkbox::Checkbox, h_flex, v_flex};
use std::collections::HashSet;
use syncform_catalog::{
    DestinationSyncMode, StreamFilter, StreamId, StreamNode, SyncModeOption, SyncSchema,
    SyncSchemaField, cycle_sync_mode, flatten_fields, stream_fields,
};
use syncform_ui::widgets::{cell::Cell, row_height};

/// Events emitted by the stream tree
#[derive(Clone, Debug)]
pub enum TreeViewEvent {
    /// A stream was edited; carries the complete replacement schema
    SchemaChanged(SyncSchema),
}

pub struct StreamTreeView {
    schema: SyncSchema,
    destination_sync_modes: Vec<DestinationSyncMode>,
    filter: StreamFilter,
    expand_by_default: bool,
    /// Streams whose expansion differs from `expand_by_default`
    toggled: HashSet<StreamId>,
}

impl EventEmitter<TreeViewEvent> for StreamTreeView {}

impl StreamTreeView {
    pub fn new(schema: SyncSchema, destination_sync_modes: Vec<DestinationSyncMode>) -> Self {
        Self {
            schema,
            destination_sync_modes,
            filter: StreamFilter::default(),
            expand_by_default: false,
            toggled: HashSet::new(),
        }
    }

    pub fn expand_by_default(mut self, expand: bool) -> Self {
        self.expand_by_default = expand;
        self
    }

    pub fn schema(&self) -> &SyncSchema {
        &self.schema
    }

    pub fn filter(&self) -> &str {
        self.filter.text()
    }

    pub fn set_schema(&mut self, schema: SyncSchema, cx: &mut Context<Self>) {
        self.schema = schema;
        cx.notify();
    }

    pub fn set_filter(&mut self, filter: &str, cx: &mut Context<Self>) {
        self.filter = StreamFilter::new(filter);
        cx.notify();
    }

    pub fn set_destination_sync_modes(
        &mut self,
        modes: Vec<DestinationSyncMode>,
        cx: &mut Context<Self>,
    ) {
        self.destination_sync_modes = modes;
        cx.notify();
    }

    /// Indices of the streams currently shown, in schema order
    pub fn visible_indices(&self) -> Vec<usize> {
        self.schema
            .matching(&self.filter)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_expanded(&self, id: &StreamId) -> bool {
        self.expand_by_default != self.toggled.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: StreamId, cx: &mut Context<Self>) {
        if !self.toggled.remove(&id) {
            self.toggled.insert(id);
        }
        cx.notify();
    }

    pub fn toggle_stream_selected(&mut self, index: usize, cx: &mut Context<Self>) {
        if index >= self.schema.len() {
            return;
        }
        let schema = self.schema.with_selection_toggled(index);
        tracing::debug!(
            stream = %schema.streams[index].stream.id(),
            selected = schema.streams[index].config.selected,
            "Stream selection toggled"
        );
        cx.emit(TreeViewEvent::SchemaChanged(schema));
    }

    pub fn cycle_stream_sync_mode(&mut self, index: usize, cx: &mut Context<Self>) {
        let Some(node) = self.schema.streams.get(index) else {
            return;
        };
        let next = cycle_sync_mode(node, &self.destination_sync_modes);
        if next == *node {
            return;
        }
        tracing::debug!(
            stream = %next.stream.id(),
            sync_mode = ?next.config.sync_mode,
            destination_sync_mode = ?next.config.destination_sync_mode,
            "Stream sync mode changed"
        );
        cx.emit(TreeViewEvent::SchemaChanged(self.schema.with_node(index, next)));
    }

    fn render_stream_row(
        &self,
        index: usize,
        node: &StreamNode,
        has_fields: bool,
        theme: &Theme,
        cx: &Context<Self>,
    ) -> AnyElement {
        let id = node.stream.id();
        let expanded = self.is_expanded(&id);
        let sync_label = SyncModeOption::of(node).display_name();

        h_flex()
            .id(ElementId::Name(format!("stream-row-{}", index).into()))
            .debug_selector(move || format!("stream-row-{}", index))
            .w_full()
            .h(row_height())
            .border_b_1()
            .border_color(theme.border)
            .hover(|s| s.bg(theme.list_hover))
            .child(
                Cell::new()
                    .flex(2.0)
                    .child(
                        Checkbox::new(ElementId::Name(format!("stream-selected-{}", index).into()))
                            .checked(node.config.selected)
                            .on_click(cx.listener(move |this, _: &bool, _, cx| {
                                this.toggle_stream_selected(index, cx);
                            })),
                    )
                    .child(
                        div()
                            .id(ElementId::Name(format!("stream-expand-{}", index).into()))
                            .w(px(16.0))
                            .ml_1()
                            .text_color(theme.muted_foreground)
                            .when(has_fields, |this| {
                                this.cursor_pointer()
                                    .child(if expanded { "▾" } else { "▸" })
                                    .on_click(cx.listener(move |this, _, _, cx| {
                                        this.toggle_expanded(id.clone(), cx);
                                    }))
                            }),
                    )
                    .child(node.stream.name.clone()),
            )
            .child(Cell::new().child(node.stream.namespace.clone().unwrap_or_default()))
            .child(Cell::new())
            .child(Cell::new().child(node.config.alias_name.clone()))
            .child(Cell::new().child(node.config.primary_key_display()))
            .child(Cell::new().child(node.config.cursor_field_display()))
            .child(
                Cell::new().flex(1.5).child(
                    div()
                        .id(ElementId::Name(format!("stream-sync-mode-{}", index).into()))
                        .px_2()
                        .rounded(theme.radius)
                        .border_1()
                        .border_color(theme.border)
                        .cursor_pointer()
                        .hover(|s| s.bg(theme.background))
                        .on_click(cx.listener(move |this, _, _, cx| {
                            this.cycle_stream_sync_mode(index, cx);
                        }))
                        .child(sync_label),
                ),
            )
            .into_any_element()
    }

    fn render_field_rows(&self, fields: &[SyncSchemaField], theme: &Theme) -> Vec<AnyElement> {
        flatten_fields(fields)
            .into_iter()
            .map(|(depth, field)| {
                h_flex()
                    .w_full()
                    .h(row_height())
                    .text_color(theme.muted_foreground)
                    .child(
                        Cell::new().flex(2.0).child(
                            div()
                                .pl(px(36.0 + 16.0 * depth as f32))
                                .child(field.name.clone()),
                        ),
                    )
                    .child(Cell::new())
                    .child(Cell::light().child(field.data_type.clone()))
                    .child(Cell::light().child(field.clean_name.clone()))
                    .child(Cell::new())
                    .child(Cell::new())
                    .child(Cell::new().flex(1.5))
                    .into_any_element()
            })
            .collect()
    }
}

impl Render for StreamTreeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let mut rows = Vec::new();

        for (index, node) in self.schema.matching(&self.filter) {
            let fields = stream_fields(&node.stream);
            rows.push(self.render_stream_row(index, node, !fields.is_empty(), &theme, cx));
            if self.is_expanded(&node.stream.id()) {
                rows.extend(self.render_field_rows(&fields, &theme));
            }
        }

        let is_empty = rows.is_empty();

        v_flex()
            .w_full()
            .children(rows)
            .when(is_empty, |this| {
                this.child(
                    div()
                        .p_4()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("No streams match the search"),
                )
            })
    }
}
