//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{ContentLoader, Post};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;

    let output = match content_type {
        "section" | "sections" => format_sections(&posts),
        "post" | "posts" => format_posts(&posts),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: section, post",
                content_type
            );
        }
    };

    print!("{}", output);
    Ok(())
}

/// Sections in index order with their label and listed note count
fn format_sections(posts: &[Post]) -> String {
    // IndexMap keeps first-occurrence order, same as the section index
    let mut summary: IndexMap<&str, (&str, usize)> = IndexMap::new();
    for post in posts {
        let entry = summary
            .entry(post.section.as_str())
            .or_insert((post.label.as_str(), 0));
        if !post.is_home() {
            entry.1 += 1;
        }
    }

    let mut out = format!("Sections ({}):\n", summary.len());
    for (section, (label, count)) in summary {
        out.push_str(&format!("  {} - {} ({})\n", section, label, count));
    }
    out
}

fn format_posts(posts: &[Post]) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        out.push_str(&format!("  {} - {} [{}]\n", post.href(), post.title, post.label));
    }
    out
}
