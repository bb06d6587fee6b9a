//! Hash locations (`#/<section>/<slug>`)

/// A parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `#/<section>`: the note list of a section
    Section(String),
    /// `#/<section>/<slug>`: a single post
    Post { section: String, slug: String },
}

impl Location {
    /// Parse a hash fragment.
    ///
    /// The fragment is split on `/`. The first piece (the `#` prefix) is
    /// dropped, the next two are section and slug, anything after is ignored.
    /// Empty pieces count as absent. Returns `None` when neither a section nor
    /// a slug is present.
    ///
    /// A slug alone is still a post location; its section is then empty.
    pub fn parse(hash: &str) -> Option<Self> {
        let mut pieces = hash.split('/').skip(1);
        let section = pieces.next().unwrap_or_default();
        let slug = pieces.next().unwrap_or_default();

        if !slug.is_empty() {
            Some(Self::Post {
                section: section.to_string(),
                slug: slug.to_string(),
            })
        } else if !section.is_empty() {
            Some(Self::Section(section.to_string()))
        } else {
            None
        }
    }
}
