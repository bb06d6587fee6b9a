//! Content loader - loads zettel notes as posts

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{MarkdownRenderer, Post, HOME};
use crate::Site;

/// Content loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Zettel directory not found: {0:?}")]
    ZettelDirNotFound(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {path:?}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("Invalid note pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Loads posts from the zettel directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(&site.config.highlight);
        Self { site, renderer }
    }

    /// Load every post: the README as the home post, then each configured
    /// section folder in configuration order
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let zettel_dir = &self.site.zettel_dir;
        if !zettel_dir.is_dir() {
            return Err(LoadError::ZettelDirNotFound(zettel_dir.clone()));
        }

        let mut posts = Vec::new();

        let readme = zettel_dir.join(&self.site.config.readme);
        if readme.is_file() {
            match self.render_file(&readme) {
                Ok(content) => {
                    posts.push(Post::new(HOME, HOME, "Home", &content).with_label("Home"));
                }
                Err(e) => tracing::warn!("Skipping home note: {}", e),
            }
        }

        for (folder, label) in &self.site.config.sections {
            let dir = zettel_dir.join(folder);
            if !dir.is_dir() {
                tracing::debug!("Section folder missing, skipping: {:?}", dir);
                continue;
            }

            for path in note_files(&dir)? {
                match self.load_post(&path, folder, label) {
                    Ok(post) => posts.push(post),
                    Err(e) => tracing::warn!("Skipping note: {}", e),
                }
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), zettel_dir);

        Ok(posts)
    }

    /// Load a single note from a section folder
    fn load_post(&self, path: &Path, section: &str, label: &str) -> Result<Post, LoadError> {
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        if !is_hash_safe(&slug) {
            tracing::warn!(
                "Note {:?} has a slug the browser will percent-encode; its link will not resolve",
                path
            );
        }
        let title = slug.replace('_', " ");
        let content = self.render_file(path)?;

        Ok(Post::new(section, &slug, &title, &content).with_label(label))
    }

    fn render_file(&self, path: &Path) -> Result<String, LoadError> {
        let markdown = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.renderer
            .render(&markdown)
            .map_err(|e| LoadError::Render {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Slugs survive a round trip through `location.hash` only when no
/// character gets percent-encoded
fn is_hash_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// Markdown files directly inside `dir`, sorted by path
fn note_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let pattern = format!(
        "{}/*.md",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    Ok(files)
}
