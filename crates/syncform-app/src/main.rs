//! Syncform - connection form with stream schema selection
//!
//! Usage: `syncform [CATALOG_JSON]`. Without an argument the catalog path is
//! read from `SYNCFORM_CATALOG`, falling back to the bundled demo catalog.

use gpui::*;
use gpui_component::Root;
use syncform_app::{CatalogSource, ConnectionForm, logging};
use syncform_catalog::SyncSchema;

fn main() {
    if let Err(e) = logging::init_default() {
        // Logging is not available yet.
        eprintln!("FATAL: Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Syncform");

    let source = CatalogSource::from_env();
    let schema = match source.load() {
        Ok(schema) => schema,
        Err(err) => {
            tracing::error!(
                source = %source.display_name(),
                "Failed to load catalog: {:#}",
                err
            );
            SyncSchema::default()
        }
    };

    Application::new().run(move |cx| {
        syncform_ui::init(cx);
        syncform_settings::init(cx);

        if let Err(e) = open_main_window(source, schema, cx) {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
        }
    });
}

fn open_main_window(
    source: CatalogSource,
    schema: SyncSchema,
    cx: &mut App,
) -> anyhow::Result<()> {
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::centered(size(px(1200.0), px(760.0)), cx)),
        window_min_size: Some(size(px(900.0), px(480.0))),
        ..Default::default()
    };

    cx.open_window(window_options, |window, cx| {
        window.set_window_title("Syncform");
        let form = cx.new(|cx| ConnectionForm::from_settings(source, schema, window, cx));
        cx.new(|cx| Root::new(form, window, cx))
    })?;

    tracing::info!("Main window opened");
    Ok(())
}
