//! Content module - turns zettel notes into posts

pub mod loader;
mod markdown;
mod post;

pub use loader::{ContentLoader, LoadError};
pub use markdown::MarkdownRenderer;
pub use post::{Post, HOME};
