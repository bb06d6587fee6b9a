//! Hash-routed note browser
//!
//! [`Browser`] is the view controller of the generated page, modelled
//! without a DOM: it owns the three rendering regions (`sections`, `notes`,
//! `post`), the section index and the router state, and borrows the post list
//! for its whole lifetime.
//!
//! Every view operation replaces a region's markup wholesale. Failures are
//! silent: an unknown section renders an empty list, an unknown post leaves
//! everything as it was, and a hash without segments is ignored.

mod location;
mod router;
mod sections;

pub use location::Location;
pub use router::{RouteState, Router};
pub use sections::SectionIndex;

use crate::content::{Post, HOME};

/// A named output region whose markup is replaced as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: &'static str,
    markup: String,
}

impl Region {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            markup: String::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn replace(&mut self, markup: String) {
        self.markup = markup;
    }

    pub fn clear(&mut self) {
        self.markup.clear();
    }
}

/// View controller over a borrowed post list
#[derive(Debug)]
pub struct Browser<'a> {
    posts: &'a [Post],
    index: SectionIndex,
    router: Router,
    sections: Region,
    notes: Region,
    post: Region,
}

impl<'a> Browser<'a> {
    /// Create a browser with empty regions and no section selected
    pub fn new(posts: &'a [Post]) -> Self {
        Self {
            posts,
            index: SectionIndex::build(posts),
            router: Router::new(),
            sections: Region::new("sections"),
            notes: Region::new("notes"),
            post: Region::new("post"),
        }
    }

    /// Create a browser and perform the initial render: section buttons,
    /// then the home section. The current hash plays no part in this.
    pub fn start(posts: &'a [Post]) -> Self {
        let mut browser = Self::new(posts);
        browser.render_sections();
        browser.show_section(HOME);
        browser
    }

    pub fn state(&self) -> &RouteState {
        self.router.state()
    }

    pub fn section_index(&self) -> &SectionIndex {
        &self.index
    }

    pub fn regions(&self) -> [&Region; 3] {
        [&self.sections, &self.notes, &self.post]
    }

    pub fn sections_markup(&self) -> &str {
        self.sections.markup()
    }

    pub fn notes_markup(&self) -> &str {
        self.notes.markup()
    }

    pub fn post_markup(&self) -> &str {
        self.post.markup()
    }

    /// Render one button per section into the sections region
    pub fn render_sections(&mut self) {
        let markup = self
            .index
            .iter()
            .map(|s| format!(r#"<button onclick="showSection('{}')">{}</button>"#, s, s))
            .collect::<String>();
        self.sections.replace(markup);
    }

    /// Activate the section button at `index`.
    /// Returns `false` when there is no such button.
    pub fn press_section(&mut self, index: usize) -> bool {
        match self.index.get(index) {
            Some(section) => {
                let section = section.to_string();
                self.show_section(&section);
                true
            }
            None => false,
        }
    }

    /// List the notes of `section`, leaving out landing posts, and clear
    /// the post region
    pub fn show_section(&mut self, section: &str) {
        let markup = self
            .posts
            .iter()
            .filter(|p| p.section == section && !p.is_home())
            .map(|p| format!(r#"<a href="{}">{}</a>"#, p.href(), p.title))
            .collect::<String>();

        if markup.is_empty() {
            tracing::debug!("No notes listed for section {:?}", section);
        }

        self.notes.replace(markup);
        self.post.clear();
        self.router
            .commit(RouteState::SectionSelected(section.to_string()));
    }

    /// Show the first post matching `section` and `slug`.
    ///
    /// Returns `false` and changes nothing when no post matches.
    pub fn show_post(&mut self, section: &str, slug: &str) -> bool {
        let Some(post) = self
            .posts
            .iter()
            .find(|p| p.section == section && p.slug == slug)
        else {
            tracing::debug!("No post at {}/{}", section, slug);
            return false;
        };

        self.post
            .replace(format!("<h2>{}</h2>{}", post.title, post.content));
        self.router.commit(RouteState::PostSelected {
            section: section.to_string(),
            slug: slug.to_string(),
        });
        true
    }

    /// Handle a navigation event.
    ///
    /// Returns `true` when the view changed.
    pub fn navigate(&mut self, hash: &str) -> bool {
        match Router::resolve(hash) {
            Some(RouteState::PostSelected { section, slug }) => self.show_post(&section, &slug),
            Some(RouteState::SectionSelected(section)) => {
                self.show_section(&section);
                true
            }
            Some(RouteState::NoSection) | None => {
                tracing::debug!("Ignoring navigation to {:?}", hash);
                false
            }
        }
    }
}
