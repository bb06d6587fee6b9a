//! Browse the site headlessly
//!
//! Runs the page's view controller over the loaded notes and prints the
//! three regions after start-up and after every navigation.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::browser::Browser;
use crate::content::ContentLoader;
use crate::Site;

/// Start a browser and apply each hash in turn. With no hashes, hashes are
/// read from stdin one per line.
pub fn run(site: &Site, hashes: &[String]) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    let mut browser = Browser::start(&posts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", snapshot(&browser))?;

    if hashes.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            write!(out, "{}", step(&mut browser, line.trim()))?;
            out.flush()?;
        }
    } else {
        for hash in hashes {
            write!(out, "{}", step(&mut browser, hash))?;
        }
    }

    Ok(())
}

/// Navigate and describe the outcome
fn step(browser: &mut Browser<'_>, hash: &str) -> String {
    if browser.navigate(hash) {
        format!("\n> {}\n{}", hash, snapshot(browser))
    } else {
        format!("\n> {} (unchanged)\n", hash)
    }
}

/// Current state and region markup
fn snapshot(browser: &Browser<'_>) -> String {
    let mut out = format!("state: {}\n", browser.state());
    for region in browser.regions() {
        out.push_str(&format!("[{}]\n{}\n", region.name(), region.markup()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    #[test]
    fn test_snapshot_after_start() {
        let posts = vec![
            Post::new("home", "home", "Welcome", "<p>Hi</p>"),
            Post::new("blog", "a", "First", "<p>A</p>"),
        ];
        let browser = Browser::start(&posts);
        assert_eq!(
            snapshot(&browser),
            concat!(
                "state: section home\n",
                "[sections]\n",
                r#"<button onclick="showSection('home')">home</button>"#,
                r#"<button onclick="showSection('blog')">blog</button>"#,
                "\n[notes]\n\n[post]\n\n"
            )
        );
    }

    #[test]
    fn test_step_reports_unchanged() {
        let posts = vec![Post::new("blog", "a", "First", "<p>A</p>")];
        let mut browser = Browser::start(&posts);
        assert_eq!(step(&mut browser, "#/blog/zzz"), "\n> #/blog/zzz (unchanged)\n");

        let shown = step(&mut browser, "#/blog/a");
        assert!(shown.starts_with("\n> #/blog/a\nstate: post blog/a\n"));
        assert!(shown.contains("<h2>First</h2><p>A</p>"));
    }
}
