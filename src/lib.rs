//! zettel-site: a static site builder and hash-routed browser for zettel notes
//!
//! Notes from a zettelkasten folder are loaded as posts grouped by section,
//! written out as a single-page site, and browsed by `#/<section>/<slug>`
//! navigation. The [`browser`] module models the page's view controller so
//! the routing and rendering rules can be exercised without a DOM.

pub mod browser;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Zettel (notes) directory
    pub zettel_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets copied as-is into the output
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, honoring the `ZETTEL_DIR`
    /// environment variable
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let zettel_override = std::env::var_os(config::ZETTEL_DIR_ENV).map(PathBuf::from);
        Self::with_zettel_dir(base_dir, zettel_override)
    }

    /// Create a new site, overriding the configured zettel directory
    pub fn with_zettel_dir<P: AsRef<Path>>(base_dir: P, zettel_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        // join() keeps absolute paths as they are
        let zettel_dir = zettel_dir
            .map(|dir| base_dir.join(dir))
            .unwrap_or_else(|| base_dir.join(&config.zettel_dir));
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            zettel_dir,
            public_dir,
            static_dir,
        })
    }

    /// Path of the site configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_zettel_dir(dir.path(), None).unwrap();
        assert_eq!(site.zettel_dir, dir.path().join("zettel"));
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_config_and_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "zettel_dir: notes\npublic_dir: out\n",
        )
        .unwrap();

        let site = Site::with_zettel_dir(dir.path(), None).unwrap();
        assert_eq!(site.zettel_dir, dir.path().join("notes"));
        assert_eq!(site.public_dir, dir.path().join("out"));

        let elsewhere = TempDir::new().unwrap();
        let site =
            Site::with_zettel_dir(dir.path(), Some(elsewhere.path().to_path_buf())).unwrap();
        assert_eq!(site.zettel_dir, elsewhere.path());
    }
}
