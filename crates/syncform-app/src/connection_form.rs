//! Connection form: owns the sync schema and hosts the schema view

use gpui::*;
use syncform_catalog::{DestinationSyncMode, SyncSchema};
use syncform_schema_view::{SchemaView, SchemaViewEvent, SchemaViewOptions};
use syncform_settings::SyncformSettings;
use gpui_component::{ActiveTheme, v_flex};

use crate::catalog_source::CatalogSource;
use crate::toolbar::{SchemaToolbar, ToolbarEvent};

pub struct ConnectionForm {
    source: CatalogSource,
    schema: SyncSchema,
    schema_view: Entity<SchemaView>,
    toolbar: Entity<SchemaToolbar>,
    _subscriptions: Vec<Subscription>,
}

impl ConnectionForm {
    pub fn new(
        source: CatalogSource,
        schema: SyncSchema,
        destination_sync_modes: Vec<DestinationSyncMode>,
        options: SchemaViewOptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let toolbar = cx.new(|_| SchemaToolbar::new(&schema));
        let schema_view = cx.new(|cx| {
            SchemaView::with_options(schema.clone(), destination_sync_modes, options, window, cx)
                .with_additional_control(toolbar.clone())
        });

        let subscriptions = vec![
            cx.subscribe(
                &schema_view,
                |this, _view, event: &SchemaViewEvent, cx| match event {
                    SchemaViewEvent::SchemaChanged(schema) => {
                        this.apply_schema(schema.clone(), cx);
                    }
                },
            ),
            cx.subscribe(&toolbar, |this, _toolbar, event: &ToolbarEvent, cx| match event {
                ToolbarEvent::Reload => this.reload(cx),
            }),
            cx.observe_global::<SyncformSettings>(|this, cx| {
                let modes = SyncformSettings::global(cx)
                    .destination
                    .supported_sync_modes
                    .clone();
                this.schema_view
                    .update(cx, |view, cx| view.set_destination_sync_modes(modes, cx));
            }),
        ];

        Self {
            source,
            schema,
            schema_view,
            toolbar,
            _subscriptions: subscriptions,
        }
    }

    /// Builds the form from the settings global
    pub fn from_settings(
        source: CatalogSource,
        schema: SyncSchema,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let settings = SyncformSettings::global(cx).clone();
        let options = SchemaViewOptions {
            search_placeholder: settings.schema_view.search_placeholder.into(),
            expand_streams_by_default: settings.schema_view.expand_streams_by_default,
        };
        Self::new(
            source,
            schema,
            settings.destination.supported_sync_modes,
            options,
            window,
            cx,
        )
    }

    pub fn schema(&self) -> &SyncSchema {
        &self.schema
    }

    pub fn schema_view(&self) -> &Entity<SchemaView> {
        &self.schema_view
    }

    pub fn toolbar(&self) -> &Entity<SchemaToolbar> {
        &self.toolbar
    }

    /// Take ownership of a replacement schema and push it down to the views
    pub fn apply_schema(&mut self, schema: SyncSchema, cx: &mut Context<Self>) {
        self.schema = schema;
        let schema = self.schema.clone();
        self.toolbar.update(cx, |toolbar, cx| toolbar.set_schema(&schema, cx));
        self.schema_view.update(cx, |view, cx| view.set_schema(schema, cx));
        cx.notify();
    }

    /// Re-read the catalog. On failure the current schema stays in place.
    pub fn reload(&mut self, cx: &mut Context<Self>) {
        match self.source.load() {
            Ok(schema) => {
                tracing::info!(source = %self.source.display_name(), "Catalog reloaded");
                self.apply_schema(schema, cx);
            }
            Err(err) => {
                tracing::error!(
                    source = %self.source.display_name(),
                    "Failed to reload catalog: {:#}",
                    err
                );
            }
        }
    }
}

impl Render for ConnectionForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        v_flex()
            .id("connection-form")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .gap_4()
            .bg(theme.background)
            .text_color(theme.foreground)
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Set up connection"),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(format!("Source: {}", self.source.display_name())),
            )
            .child(self.schema_view.clone())
    }
}
