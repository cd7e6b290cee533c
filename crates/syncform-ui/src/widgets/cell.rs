//! Table cells for header and tree rows

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme;

/// A flexible table cell. `flex` is the grow factor relative to sibling cells
/// (a plain cell is 1).
#[derive(IntoElement)]
pub struct Cell {
    flex: f32,
    light: bool,
    children: Vec<AnyElement>,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            flex: 1.0,
            light: false,
            children: Vec::new(),
        }
    }

    /// Cell with muted text, used for column labels
    pub fn light() -> Self {
        Self {
            light: true,
            ..Self::new()
        }
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = flex;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Cell {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Cell {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let mut cell = div()
            .flex()
            .items_center()
            .min_w_0()
            .overflow_hidden()
            .whitespace_nowrap()
            .text_ellipsis()
            .px_2()
            .text_sm()
            .flex_basis(relative(0.))
            .when(self.light, |this| this.text_color(theme.muted_foreground))
            .when(!self.light, |this| this.text_color(theme.foreground));
        cell.style().flex_grow = Some(self.flex);
        cell.style().flex_shrink = Some(1.0);

        cell.children(self.children)
    }
}
