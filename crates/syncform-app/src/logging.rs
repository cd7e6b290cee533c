//! Logging setup
//!
//! Console output for development plus daily-rotated JSON files under the
//! user data directory. `RUST_LOG` overrides the default filter.

use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files should be written
    pub log_dir: PathBuf,

    /// Write JSON log files (for bug reports)
    pub enable_json_logs: bool,

    /// Pretty console output
    pub enable_console_logs: bool,

    /// Include file/line information in console logs
    pub include_location: bool,

    /// Default filter when `RUST_LOG` is not set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: log_directory(),
            enable_json_logs: true,
            enable_console_logs: true,
            include_location: cfg!(debug_assertions),
            default_filter: "info,syncform_app=debug,syncform_schema_view=debug,syncform_catalog=debug,syncform_settings=debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Quiet console, JSON files for bug reports
    pub fn production() -> Self {
        Self {
            enable_console_logs: false,
            include_location: false,
            default_filter: "warn,syncform_app=info,syncform_catalog=info,syncform_settings=info"
                .to_string(),
            ..Self::default()
        }
    }

    pub fn development() -> Self {
        Self::default()
    }
}

pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let mut layers = Vec::new();

    if config.enable_console_logs {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_span_events(FmtSpan::NONE)
            .with_ansi(true)
            .pretty()
            .with_filter(env_filter.clone())
            .boxed();

        layers.push(console_layer);
    }

    if config.enable_json_logs {
        std::fs::create_dir_all(&config.log_dir)?;
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "syncform.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop and must outlive every log call.
        std::mem::forget(guard);

        let json_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_writer(non_blocking)
            .with_filter(env_filter)
            .boxed();

        layers.push(json_layer);
    }

    tracing_subscriber::registry().with(layers).init();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        json_enabled = config.enable_json_logs,
        console_enabled = config.enable_console_logs,
        "Logging system initialized"
    );

    Ok(())
}

pub fn init_default() -> anyhow::Result<()> {
    let config = if cfg!(debug_assertions) {
        LoggingConfig::development()
    } else {
        LoggingConfig::production()
    };

    init(config)
}

pub fn log_directory() -> PathBuf {
    syncform_settings::logs_dir().unwrap_or_else(|_| PathBuf::from("logs"))
}
