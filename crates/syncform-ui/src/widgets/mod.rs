//! Syncform UI Widgets

use gpui::{Pixels, px};

pub mod cell;

/// Height of one row in the schema header and stream tree
pub fn row_height() -> Pixels {
    px(32.0)
}
