//! Control shown next to the schema title: selection count and reload

use gpui::*;
use syncform_catalog::SyncSchema;
use gpui_component::{ActiveTheme, h_flex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarEvent {
    Reload,
}

#[derive(Default)]
pub struct SchemaToolbar {
    selected: usize,
    total: usize,
}

impl EventEmitter<ToolbarEvent> for SchemaToolbar {}

impl SchemaToolbar {
    pub fn new(schema: &SyncSchema) -> Self {
        let mut toolbar = Self::default();
        toolbar.count(schema);
        toolbar
    }

    pub fn set_schema(&mut self, schema: &SyncSchema, cx: &mut Context<Self>) {
        self.count(schema);
        cx.notify();
    }

    pub fn summary(&self) -> String {
        format!("{} of {} streams selected", self.selected, self.total)
    }

    fn count(&mut self, schema: &SyncSchema) {
        self.selected = schema.streams.iter().filter(|n| n.config.selected).count();
        self.total = schema.len();
    }
}

impl Render for SchemaToolbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        h_flex()
            .gap_3()
            .text_xs()
            .child(div().text_color(theme.muted_foreground).child(self.summary()))
            .child(
                div()
                    .id("schema-reload")
                    .px_2()
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(theme.border)
                    .text_color(theme.foreground)
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.list_hover))
                    .on_click(cx.listener(|_, _, _, cx| cx.emit(ToolbarEvent::Reload)))
                    .child("Refresh source schema"),
            )
    }
}
