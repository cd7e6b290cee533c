//! Search cell of the schema header: search box plus the "check all" box

use gpui::*;
use gpui_component::{
    Sizable as _,
    checkbox::Checkbox,
    h_flex,
    input::{Input, InputEvent, InputState},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// Search text changed
    Changed(String),
    /// The "check all" box was clicked
    CheckAll,
}

pub struct SchemaSearch {
    input: Entity<InputState>,
    has_selected_item: bool,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<SearchEvent> for SchemaSearch {}

impl SchemaSearch {
    pub fn new(
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = placeholder.into();
        let input = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));

        let subscriptions = vec![cx.subscribe(&input, |_this, input, event: &InputEvent, cx| {
            if let InputEvent::Change = event {
                let value = input.read(cx).value().to_string();
                cx.emit(SearchEvent::Changed(value));
            }
        })];

        Self {
            input,
            has_selected_item: false,
            _subscriptions: subscriptions,
        }
    }

    pub fn input(&self) -> &Entity<InputState> {
        &self.input
    }

    pub fn has_selected_item(&self) -> bool {
        self.has_selected_item
    }

    pub fn set_has_selected_item(&mut self, has_selected_item: bool, cx: &mut Context<Self>) {
        if self.has_selected_item != has_selected_item {
            self.has_selected_item = has_selected_item;
            cx.notify();
        }
    }

    pub fn request_check_all(&mut self, cx: &mut Context<Self>) {
        cx.emit(SearchEvent::CheckAll);
    }
}

impl Render for SchemaSearch {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_2()
            .child(
                Checkbox::new("schema-check-all")
                    .checked(self.has_selected_item)
                    .on_click(cx.listener(|this, _checked: &bool, _, cx| {
                        this.request_check_all(cx);
                    })),
            )
            .child(Input::new(&self.input).small().flex_1())
    }
}
