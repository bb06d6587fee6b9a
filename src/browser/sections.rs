//! Section index

use indexmap::IndexSet;

use crate::content::Post;

/// Distinct sections of a post list, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionIndex {
    sections: IndexSet<String>,
}

impl SectionIndex {
    /// Build the index from an ordered post list
    pub fn build(posts: &[Post]) -> Self {
        let sections = posts.iter().map(|p| p.section.clone()).collect();
        Self { sections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sections.get_index(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(section: &str, slug: &str) -> Post {
        Post::new(section, slug, slug, "")
    }

    #[test]
    fn test_first_occurrence_order() {
        let posts = vec![
            post("home", "home"),
            post("blog", "a"),
            post("notes", "x"),
            post("blog", "b"),
            post("home", "other"),
        ];
        let index = SectionIndex::build(&posts);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["home", "blog", "notes"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(1), Some("blog"));
        assert_eq!(index.get(3), None);
    }

    #[test]
    fn test_empty_input() {
        let index = SectionIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
