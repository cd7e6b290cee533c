//! Where the form reads its stream catalog from

use anyhow::{Context, Result};
use std::path::PathBuf;
use syncform_catalog::SyncSchema;

/// Environment variable naming the catalog file when no argument is given
pub const CATALOG_ENV_VAR: &str = "SYNCFORM_CATALOG";

const DEMO_CATALOG: &str = include_str!("../assets/demo_catalog.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    /// Catalog bundled with the binary
    Demo,
}

impl CatalogSource {
    /// First positional argument wins, then the environment variable, then
    /// the bundled demo catalog.
    pub fn resolve(mut args: impl Iterator<Item = String>, env_value: Option<String>) -> Self {
        args.next()
            .or(env_value)
            .filter(|value| !value.trim().is_empty())
            .map(|value| Self::File(PathBuf::from(value)))
            .unwrap_or(Self::Demo)
    }

    pub fn from_env() -> Self {
        Self::resolve(std::env::args().skip(1), std::env::var(CATALOG_ENV_VAR).ok())
    }

    pub fn load(&self) -> Result<SyncSchema> {
        match self {
            Self::File(path) => SyncSchema::load(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path)),
            Self::Demo => {
                SyncSchema::from_json(DEMO_CATALOG).context("Failed to parse bundled demo catalog")
            }
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Demo => "demo catalog".to_string(),
        }
    }
}
