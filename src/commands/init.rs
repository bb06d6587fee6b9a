//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::SiteConfig;

/// Directory to initialize: `folder` under `base_dir`, without `.` parts
pub fn target_dir(base_dir: &Path, folder: &Path) -> PathBuf {
    folder
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .fold(base_dir.to_path_buf(), |dir, c| dir.join(c))
}

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create site directory {:?}", target_dir))?;
    fs::create_dir_all(target_dir.join(&config.static_dir))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, default_config_yaml(&config))?;
    }

    let zettel_dir = target_dir.join(&config.zettel_dir);
    for folder in config.sections.keys() {
        fs::create_dir_all(zettel_dir.join(folder))?;
    }

    let readme = zettel_dir.join(&config.readme);
    if !readme.exists() {
        fs::write(&readme, README)?;
    }

    if let Some(first) = config.sections.keys().next() {
        let sample = zettel_dir.join(first).join("first_note.md");
        if !sample.exists() {
            fs::write(&sample, SAMPLE_NOTE)?;
        }
    }

    Ok(())
}

fn default_config_yaml(config: &SiteConfig) -> String {
    let sections: String = config
        .sections
        .iter()
        .map(|(folder, label)| format!("  {}: {}\n", folder, label))
        .collect();

    format!(
        r#"# Site
title: {title}
language: {language}

# Directory
zettel_dir: {zettel_dir}
public_dir: {public_dir}
static_dir: {static_dir}
readme: {readme}

# Zettel folders shown as sections, in this order
sections:
{sections}
# Code blocks
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false
"#,
        title = config.title,
        language = config.language,
        zettel_dir = config.zettel_dir,
        public_dir = config.public_dir,
        static_dir = config.static_dir,
        readme = config.readme,
        sections = sections,
    )
}

const README: &str = r#"# Notes

This is the landing page. Pick a section above to list its notes.
"#;

const SAMPLE_NOTE: &str = r#"# First note

A fleeting thought, written down before it escapes.

```rust
fn main() {
    println!("hello, zettel");
}
```
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_layout() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("static").is_dir());
        assert!(dir.path().join("zettel/README.md").exists());
        assert!(dir.path().join("zettel/00-fly/first_note.md").exists());
        assert!(dir.path().join("zettel/03-structure").is_dir());
    }

    #[test]
    fn test_init_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let target = target_dir(&dir.path().join("new/site"), Path::new("."));
        assert_eq!(target, dir.path().join("new/site"));

        init_site(&target).unwrap();
        assert!(target.join("_config.yml").exists());
    }

    #[test]
    fn test_target_dir() {
        let base = Path::new("/srv/base");
        assert_eq!(target_dir(base, Path::new(".")), base);
        assert_eq!(target_dir(base, Path::new("./notes")), base.join("notes"));
        assert_eq!(target_dir(base, Path::new("/abs")), Path::new("/abs"));
    }

    #[test]
    fn test_generated_config_round_trips() {
        let yaml = default_config_yaml(&SiteConfig::default());
        let parsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.title, defaults.title);
        assert_eq!(parsed.sections, defaults.sections);
        assert_eq!(parsed.highlight.theme, defaults.highlight.theme);
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Mine\n").unwrap();
        init_site(dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("_config.yml")).unwrap(),
            "title: Mine\n"
        );
    }
}
