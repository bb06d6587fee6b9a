//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `zettel_dir`
pub const ZETTEL_DIR_ENV: &str = "ZETTEL_DIR";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Directory
    pub zettel_dir: String,
    pub public_dir: String,
    pub static_dir: String,
    pub readme: String,

    /// Zettel folders rendered as sections, keyed by folder name with the
    /// human label as value. Order follows the YAML file.
    pub sections: IndexMap<String, String>,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let sections = [
            ("00-fly", "Fleeting"),
            ("01-literature", "Literature"),
            ("02-permanent", "Permanent"),
            ("03-structure", "Structure"),
        ]
        .into_iter()
        .map(|(folder, label)| (folder.to_string(), label.to_string()))
        .collect();

        Self {
            title: "Notes".to_string(),
            language: "en".to_string(),

            zettel_dir: "zettel".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),
            readme: "README.md".to_string(),

            sections,

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
