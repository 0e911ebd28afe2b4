//! Catalog configuration loaded from TOML.
//!
//! Only deployment-tunable knobs live here (per-family page sizes). The
//! relevance weights, the related-content cap, and the pagination window are
//! design constants, not configuration.

use crate::error::Result;
use crate::model::Family;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Listing settings for one content family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FamilySettings {
    pub page_size: u32,
}

impl Default for FamilySettings {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

/// Crate-wide configuration, usually read from `grimmiz.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: FamilySettings,
    pub articles: FamilySettings,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: FamilySettings { page_size: 12 },
            articles: FamilySettings { page_size: 6 },
        }
    }
}

impl CatalogConfig {
    /// Page size for a family's listings.
    pub const fn page_size(&self, family: Family) -> u32 {
        match family {
            Family::Products => self.products.page_size,
            Family::Articles => self.articles.page_size,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("Loaded catalog config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default catalog config: {:#}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use std::io::Write;

    #[test]
    fn defaults_differ_per_family() {
        let config = CatalogConfig::default();
        check!(config.page_size(Family::Products) == 12);
        check!(config.page_size(Family::Articles) == 6);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[articles]\npage_size = 9\n").unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        check!(config.page_size(Family::Articles) == 9);
        // Unnamed sections keep their defaults.
        check!(config.page_size(Family::Products) == 12);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CatalogConfig::load_or_default(Path::new("/nonexistent/grimmiz.toml"));
        check!(config == CatalogConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "products = \"not a table\"").unwrap();
        check!(CatalogConfig::load(file.path()).is_err());
    }
}
