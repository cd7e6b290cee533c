//! Schema View
//!
//! Title row, column header with the search cell, and the bordered stream tree.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme, h_flex, v_flex};
use syncform_catalog::{DestinationSyncMode, SyncSchema};
use syncform_ui::widgets::cell::Cell;

use crate::search::{SchemaSearch, SearchEvent};
use crate::selection::SchemaSelection;
use crate::tree_view::{StreamTreeView, TreeViewEvent};

/// Events emitted by the schema view
#[derive(Clone, Debug)]
pub enum SchemaViewEvent {
    /// The user edited the schema; carries the complete replacement. The
    /// view keeps showing its current schema until `set_schema` is called.
    SchemaChanged(SyncSchema),
}

/// Presentation options for the schema view
#[derive(Debug, Clone)]
pub struct SchemaViewOptions {
    pub search_placeholder: SharedString,
    pub expand_streams_by_default: bool,
}

impl Default for SchemaViewOptions {
    fn default() -> Self {
        Self {
            search_placeholder: "Search stream name".into(),
            expand_streams_by_default: false,
        }
    }
}

const COLUMN_LABELS: [&str; 5] = [
    "Namespace",
    "Data type",
    "Cleaned name",
    "Primary key",
    "Cursor field",
];

pub struct SchemaView {
    selection: SchemaSelection,
    destination_sync_modes: Vec<DestinationSyncMode>,
    additional_control: Option<AnyView>,
    search: Entity<SchemaSearch>,
    tree_view: Entity<StreamTreeView>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<SchemaViewEvent> for SchemaView {}

impl SchemaView {
    pub fn new(
        schema: SyncSchema,
        destination_sync_modes: Vec<DestinationSyncMode>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self::with_options(
            schema,
            destination_sync_modes,
            SchemaViewOptions::default(),
            window,
            cx,
        )
    }

    pub fn with_options(
        schema: SyncSchema,
        destination_sync_modes: Vec<DestinationSyncMode>,
        options: SchemaViewOptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let selection = SchemaSelection::new(schema);
        let has_selected_item = selection.has_selected_item();

        let search = cx.new(|cx| {
            let mut search = SchemaSearch::new(options.search_placeholder.clone(), window, cx);
            search.set_has_selected_item(has_selected_item, cx);
            search
        });

        let tree_view = cx.new(|_| {
            StreamTreeView::new(selection.schema().clone(), destination_sync_modes.clone())
                .expand_by_default(options.expand_streams_by_default)
        });

        let subscriptions = vec![
            cx.subscribe(&search, |this, _search, event: &SearchEvent, cx| match event {
                SearchEvent::Changed(text) => this.set_search(text, cx),
                SearchEvent::CheckAll => this.check_all(cx),
            }),
            cx.subscribe(
                &tree_view,
                |_this, _tree, event: &TreeViewEvent, cx| match event {
                    TreeViewEvent::SchemaChanged(schema) => {
                        cx.emit(SchemaViewEvent::SchemaChanged(schema.clone()));
                    }
                },
            ),
        ];

        Self {
            selection,
            destination_sync_modes,
            additional_control: None,
            search,
            tree_view,
            _subscriptions: subscriptions,
        }
    }

    /// Content rendered next to the title
    pub fn with_additional_control(mut self, control: impl Into<AnyView>) -> Self {
        self.additional_control = Some(control.into());
        self
    }

    pub fn schema(&self) -> &SyncSchema {
        self.selection.schema()
    }

    pub fn search_text(&self) -> &str {
        self.selection.search()
    }

    pub fn has_selected_item(&self) -> bool {
        self.selection.has_selected_item()
    }

    pub fn destination_sync_modes(&self) -> &[DestinationSyncMode] {
        &self.destination_sync_modes
    }

    pub fn search(&self) -> &Entity<SchemaSearch> {
        &self.search
    }

    pub fn tree_view(&self) -> &Entity<StreamTreeView> {
        &self.tree_view
    }

    /// Replace the displayed schema with the one owned by the parent
    pub fn set_schema(&mut self, schema: SyncSchema, cx: &mut Context<Self>) {
        if !self.selection.set_schema(schema) {
            return;
        }
        let schema = self.selection.schema().clone();
        self.tree_view.update(cx, |tree, cx| tree.set_schema(schema, cx));
        self.sync_has_selected_item(cx);
        cx.notify();
    }

    pub fn set_destination_sync_modes(
        &mut self,
        modes: Vec<DestinationSyncMode>,
        cx: &mut Context<Self>,
    ) {
        self.destination_sync_modes = modes.clone();
        self.tree_view
            .update(cx, |tree, cx| tree.set_destination_sync_modes(modes, cx));
        cx.notify();
    }

    pub fn set_search(&mut self, search: &str, cx: &mut Context<Self>) {
        if !self.selection.set_search(search) {
            return;
        }
        tracing::debug!(search, "Schema search changed");
        let filter = search.to_string();
        self.tree_view.update(cx, |tree, cx| tree.set_filter(&filter, cx));
        self.sync_has_selected_item(cx);
        cx.notify();
    }

    /// Select every stream matching the search when none of them is
    /// selected, otherwise deselect them all. Emits the replacement schema.
    pub fn check_all(&mut self, cx: &mut Context<Self>) {
        let schema = self.selection.check_all();
        cx.emit(SchemaViewEvent::SchemaChanged(schema));
    }

    fn sync_has_selected_item(&mut self, cx: &mut Context<Self>) {
        let has_selected_item = self.selection.has_selected_item();
        self.search
            .update(cx, |search, cx| search.set_has_selected_item(has_selected_item, cx));
    }
}

impl Render for SchemaView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        v_flex()
            .w_full()
            .child(
                h_flex()
                    .w_full()
                    .items_start()
                    .child(
                        div()
                            .debug_selector(|| "schema-title".into())
                            .mr(px(11.0))
                            .mb(px(13.0))
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground)
                            .child("Data sync"),
                    )
                    .when_some(self.additional_control.clone(), |this, control| {
                        this.child(
                            div()
                                .debug_selector(|| "schema-additional-control".into())
                                .child(control),
                        )
                    }),
            )
            .child(
                h_flex()
                    .debug_selector(|| "schema-header".into())
                    .w_full()
                    .min_h(px(28.0))
                    .mb(px(5.0))
                    .child(Cell::new().flex(2.0).child(self.search.clone()))
                    .children(
                        COLUMN_LABELS
                            .iter()
                            .map(|label| Cell::light().child(*label)),
                    )
                    .child(Cell::light().flex(1.5).child("Sync settings")),
            )
            .child(
                div()
                    .debug_selector(|| "schema-tree".into())
                    .w_full()
                    .mb(px(29.0))
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .rounded(theme.radius)
                    .overflow_hidden()
                    .child(self.tree_view.clone()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::rust_2024::test;
    use gpui_component::input::InputEvent;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use syncform_catalog::{Stream, StreamConfig, StreamNode};

    fn schema(entries: &[(&str, bool)]) -> SyncSchema {
        SyncSchema::new(
            entries
                .iter()
                .map(|(name, selected)| {
                    StreamNode::new(
                        Stream::new(*name),
                        StreamConfig {
                            selected: *selected,
                            ..Default::default()
                        },
                    )
                })
                .collect(),
        )
    }

    fn selection_of(schema: &SyncSchema) -> Vec<(String, bool)> {
        schema
            .streams
            .iter()
            .map(|n| (n.stream.name.clone(), n.config.selected))
            .collect()
    }

    fn view(
        schema: SyncSchema,
        cx: &mut TestAppContext,
    ) -> (Entity<SchemaView>, &mut VisualTestContext) {
        cx.update(syncform_ui::init);
        cx.add_window_view(|window, cx| {
            SchemaView::new(schema, DestinationSyncMode::all().to_vec(), window, cx)
        })
    }

    /// Records emitted schemas and, like the parent form, pushes each one
    /// back into the view.
    fn own_schema(
        view: &Entity<SchemaView>,
        cx: &mut VisualTestContext,
    ) -> Rc<RefCell<Vec<SyncSchema>>> {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let recorded = emitted.clone();
        cx.update(|_, cx| {
            cx.subscribe(view, move |view, event: &SchemaViewEvent, cx| {
                let SchemaViewEvent::SchemaChanged(schema) = event;
                recorded.borrow_mut().push(schema.clone());
                let schema = schema.clone();
                view.update(cx, |view, cx| view.set_schema(schema, cx));
            })
            .detach();
        });
        emitted
    }

    /// Types `text` into the search box the way an edit in the input does
    fn type_search(view: &Entity<SchemaView>, text: &'static str, cx: &mut VisualTestContext) {
        let input = view.read_with(cx, |view, cx| view.search().read(cx).input().clone());
        input.update_in(cx, |state, window, cx| {
            state.set_value(text, window, cx);
            cx.emit(InputEvent::Change);
        });
    }

    #[gpui::test]
    fn test_check_all_with_search(cx: &mut TestAppContext) {
        let (view, cx) = view(
            schema(&[("Users", false), ("Orders", false), ("UserEvents", false)]),
            cx,
        );
        let emitted = own_schema(&view, cx);

        view.update(cx, |view, cx| view.set_search("user", cx));
        assert!(!view.read_with(cx, |view, _| view.has_selected_item()));

        view.update(cx, |view, cx| view.check_all(cx));

        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(
            selection_of(&emitted[0]),
            vec![
                ("Users".to_string(), true),
                ("Orders".to_string(), false),
                ("UserEvents".to_string(), true),
            ]
        );
        view.read_with(cx, |view, cx| {
            assert!(view.has_selected_item());
            assert!(view.search().read(cx).has_selected_item());
            assert_eq!(view.tree_view().read(cx).schema(), &emitted[0]);
        });
    }

    #[gpui::test]
    fn test_check_all_deselects_with_empty_search(cx: &mut TestAppContext) {
        let (view, cx) = view(
            schema(&[("Users", true), ("Orders", false), ("UserEvents", false)]),
            cx,
        );
        let emitted = own_schema(&view, cx);
        assert!(view.read_with(cx, |view, _| view.has_selected_item()));

        view.update(cx, |view, cx| view.check_all(cx));

        let emitted = emitted.borrow();
        assert!(emitted[0].streams.iter().all(|n| !n.config.selected));
    }

    #[gpui::test]
    fn test_check_all_without_matches_still_emits(cx: &mut TestAppContext) {
        let original = schema(&[("Users", false), ("Orders", false), ("UserEvents", false)]);
        let (view, cx) = view(original.clone(), cx);
        let emitted = own_schema(&view, cx);

        view.update(cx, |view, cx| view.set_search("XYZ", cx));
        view.update(cx, |view, cx| view.check_all(cx));

        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0], original);
    }

    #[gpui::test]
    fn test_view_does_not_apply_its_own_edits(cx: &mut TestAppContext) {
        let original = schema(&[("Users", false)]);
        let (view, cx) = view(original.clone(), cx);

        view.update(cx, |view, cx| view.check_all(cx));
        assert_eq!(view.read_with(cx, |view, _| view.schema().clone()), original);
    }

    #[gpui::test]
    fn test_typing_in_search_box_filters(cx: &mut TestAppContext) {
        let (view, cx) = view(schema(&[("Users", true), ("Orders", false)]), cx);

        type_search(&view, "ORD", cx);

        view.read_with(cx, |view, cx| {
            assert_eq!(view.search_text(), "ORD");
            assert!(!view.has_selected_item());
            assert!(!view.search().read(cx).has_selected_item());
            assert_eq!(view.tree_view().read(cx).filter(), "ORD");
            assert_eq!(view.tree_view().read(cx).visible_indices(), vec![1]);
        });
    }

    #[gpui::test]
    fn test_check_all_box_and_tree_edits_reach_parent(cx: &mut TestAppContext) {
        let (view, cx) = view(schema(&[("Users", false), ("Orders", false)]), cx);
        let emitted = own_schema(&view, cx);

        let search = view.read_with(cx, |view, _| view.search().clone());
        search.update(cx, |search, cx| search.request_check_all(cx));

        let tree = view.read_with(cx, |view, _| view.tree_view().clone());
        tree.update(cx, |tree, cx| tree.toggle_stream_selected(1, cx));

        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 2);
        assert_eq!(
            selection_of(&emitted[1]),
            vec![("Users".to_string(), true), ("Orders".to_string(), false)]
        );
    }

    #[gpui::test]
    fn test_destination_modes_pass_through(cx: &mut TestAppContext) {
        let (view, cx) = view(schema(&[("Users", false)]), cx);
        view.update(cx, |view, cx| {
            view.set_destination_sync_modes(vec![DestinationSyncMode::Overwrite], cx)
        });
        assert_eq!(
            view.read_with(cx, |view, _| view.destination_sync_modes().to_vec()),
            vec![DestinationSyncMode::Overwrite]
        );
    }

    struct Slot;

    impl Render for Slot {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().child("slot")
        }
    }

    #[gpui::test]
    fn test_renders_layout_without_additional_control(cx: &mut TestAppContext) {
        let (view, cx) = view(schema(&[("Users", false), ("Orders", false)]), cx);
        view.update(cx, |_, cx| cx.notify());
        cx.run_until_parked();

        assert!(cx.debug_bounds("schema-title").is_some());
        assert!(cx.debug_bounds("schema-header").is_some());
        assert!(cx.debug_bounds("schema-tree").is_some());
        assert!(cx.debug_bounds("schema-additional-control").is_none());
        assert!(cx.debug_bounds("stream-row-0").is_some());
        assert!(cx.debug_bounds("stream-row-1").is_some());

        let header = cx.debug_bounds("schema-header").unwrap();
        let tree = cx.debug_bounds("schema-tree").unwrap();
        assert!(header.origin.y < tree.origin.y);
    }

    #[gpui::test]
    fn test_renders_additional_control_and_filtered_rows(cx: &mut TestAppContext) {
        cx.update(syncform_ui::init);
        let (view, cx) = cx.add_window_view(|window, cx| {
            let slot = cx.new(|_| Slot);
            SchemaView::new(
                schema(&[("Users", false), ("Orders", false)]),
                DestinationSyncMode::all().to_vec(),
                window,
                cx,
            )
            .with_additional_control(slot)
        });
        cx.run_until_parked();

        assert!(cx.debug_bounds("schema-additional-control").is_some());
        let title = cx.debug_bounds("schema-title").unwrap();
        let control = cx.debug_bounds("schema-additional-control").unwrap();
        assert!(control.origin.x > title.origin.x);

        type_search(&view, "ord", cx);
        cx.run_until_parked();

        assert!(cx.debug_bounds("stream-row-0").is_none());
        assert!(cx.debug_bounds("stream-row-1").is_some());
    }
}
