//! Syncform UI - Widgets shared by the connection form views
//!
//! Form layout pieces built on gpui-component, which supplies the theme,
//! inputs and checkboxes.

pub mod widgets;

use gpui::App;

/// Initialize gpui-component and the form widgets. Must run before any
/// widget renders.
pub fn init(cx: &mut App) {
    tracing::info!("Initializing syncform-ui...");
    gpui_component::init(cx);
}
