//! Syncform Settings
//!
//! Persistent application settings:
//! - Destination capabilities (supported destination sync modes)
//! - Schema view presentation (search placeholder, stream expansion)

use anyhow::{Context, Result};
use gpui::{App, Global};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use syncform_catalog::DestinationSyncMode;

const APP_DIR: &str = "syncform";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    base.map(|dir| dir.join(APP_DIR))
        .with_context(|| format!("Could not determine {} directory", kind))
}

pub fn config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

pub fn data_dir() -> Result<PathBuf> {
    app_dir(dirs::data_local_dir(), "data")
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

pub fn logs_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("logs"))
}

/// Load settings into the global and save them back whenever the global changes
pub fn init(cx: &mut App) {
    let settings = match SyncformSettings::load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Failed to load settings, using defaults: {:#}", err);
            SyncformSettings::default()
        }
    };
    tracing::info!(
        destination_sync_modes = ?settings.destination.supported_sync_modes,
        "Settings loaded"
    );
    cx.set_global(settings);

    cx.observe_global::<SyncformSettings>(|cx| {
        if let Err(err) = SyncformSettings::global(cx).save() {
            tracing::error!("Failed to save settings: {}", err);
        }
    })
    .detach();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyncformSettings {
    pub destination: DestinationSettings,
    pub schema_view: SchemaViewSettings,
}

impl Global for SyncformSettings {}

impl SyncformSettings {
    pub fn global(cx: &App) -> &Self {
        cx.global::<Self>()
    }

    pub fn global_mut(cx: &mut App) -> &mut Self {
        cx.global_mut::<Self>()
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&settings_file()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_file()?)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationSettings {
    pub supported_sync_modes: Vec<DestinationSyncMode>,
}

impl Default for DestinationSettings {
    fn default() -> Self {
        Self {
            supported_sync_modes: DestinationSyncMode::all().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaViewSettings {
    pub search_placeholder: String,
    pub expand_streams_by_default: bool,
}

impl Default for SchemaViewSettings {
    fn default() -> Self {
        Self {
            search_placeholder: "Search stream name".to_string(),
            expand_streams_by_default: false,
        }
    }
}
