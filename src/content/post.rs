//! Post model

use serde::{Deserialize, Serialize};

/// Section and slug of the landing note built from the zettel README
pub const HOME: &str = "home";

/// A note rendered as a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Section the post belongs to (the zettel folder name)
    pub section: String,

    /// Human label of the section
    #[serde(default)]
    pub label: String,

    /// URL-friendly name, unique within a section
    pub slug: String,

    /// Post title
    pub title: String,

    /// Rendered HTML content
    pub content: String,
}

impl Post {
    /// Create a post; the label defaults to the section name
    pub fn new(section: &str, slug: &str, title: &str, content: &str) -> Self {
        Self {
            section: section.to_string(),
            label: section.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Set the section label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Landing posts are reachable by path but never listed
    pub fn is_home(&self) -> bool {
        self.slug == HOME
    }

    /// Hash path addressing this post
    pub fn href(&self) -> String {
        format!("#/{}/{}", self.section, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href() {
        let post = Post::new("blog", "a", "First", "<p>A</p>");
        assert_eq!(post.href(), "#/blog/a");
        assert!(!post.is_home());
    }

    #[test]
    fn test_home_is_by_slug() {
        let post = Post::new("02-permanent", HOME, "Home", "");
        assert!(post.is_home());
    }

    #[test]
    fn test_serialized_shape() {
        let post = Post::new("home", "home", "Home", "<p>Hi</p>").with_label("Home");
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(
            json,
            r#"{"section":"home","label":"Home","slug":"home","title":"Home","content":"<p>Hi</p>"}"#
        );
    }
}
