//! Generator module - writes the single-page site

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::browser::SectionIndex;
use crate::content::Post;
use crate::templates::{ConfigData, PageData, TemplateRenderer, APP_JS, STYLE_CSS};
use crate::Site;

/// Name of the generated post list script
pub const POSTS_JS: &str = "posts.js";

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("Failed to create {:?}", public_dir))?;

        self.generate_index(posts)?;
        self.generate_posts_script(posts)?;

        fs::write(public_dir.join("app.js"), APP_JS)?;
        fs::write(public_dir.join("style.css"), STYLE_CSS)?;

        // Site assets last so they can replace the defaults
        self.copy_static_assets()?;

        Ok(())
    }

    /// Render index.html
    fn generate_index(&self, posts: &[Post]) -> Result<()> {
        let page = PageData {
            config: ConfigData {
                title: self.site.config.title.clone(),
                language: self.site.config.language.clone(),
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            post_count: posts.len(),
            section_count: SectionIndex::build(posts).len(),
        };

        let html = self.renderer.render_index(&page)?;
        let dest = self.site.public_dir.join("index.html");
        fs::write(&dest, html)?;
        tracing::debug!("Generated: {:?}", dest);

        Ok(())
    }

    /// Write the post list the client script reads
    fn generate_posts_script(&self, posts: &[Post]) -> Result<()> {
        let dest = self.site.public_dir.join(POSTS_JS);
        fs::write(&dest, posts_script(posts)?)?;
        tracing::debug!("Generated: {:?} ({} posts)", dest, posts.len());
        Ok(())
    }

    /// Copy files from the static directory into the output
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            if is_hidden(relative) {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            tracing::debug!("Copied: {:?} -> {:?}", path, dest);
        }

        Ok(())
    }
}

/// `const POSTS = [...];` with the posts as pretty-printed JSON
pub fn posts_script(posts: &[Post]) -> Result<String> {
    let json = serde_json::to_string_pretty(posts)?;
    Ok(format!("const POSTS = {};\n", json))
}

/// Skip components starting with `_` or `.` (drafts, dotfiles)
fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('_') || s.starts_with('.'))
            .unwrap_or(false)
    })
}
