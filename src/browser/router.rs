//! Navigation state machine

use std::fmt;

use super::Location;

/// What the browser is currently showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteState {
    /// Nothing selected yet
    #[default]
    NoSection,
    /// The note list of a section
    SectionSelected(String),
    /// A single post
    PostSelected { section: String, slug: String },
}

impl RouteState {
    /// Target state for a navigation location
    pub fn for_location(location: &Location) -> Self {
        match location {
            Location::Section(section) => Self::SectionSelected(section.clone()),
            Location::Post { section, slug } => Self::PostSelected {
                section: section.clone(),
                slug: slug.clone(),
            },
        }
    }
}

impl fmt::Display for RouteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSection => write!(f, "no section"),
            Self::SectionSelected(section) => write!(f, "section {}", section),
            Self::PostSelected { section, slug } => write!(f, "post {}/{}", section, slug),
        }
    }
}

/// Holds the current route. Transitions are computed by [`Router::resolve`]
/// and only take effect once [`Router::commit`] is called.
#[derive(Debug, Clone, Default)]
pub struct Router {
    state: RouteState,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Parse a hash and compute the state it leads to.
    /// `None` means the event is ignored.
    pub fn resolve(hash: &str) -> Option<RouteState> {
        Location::parse(hash).map(|location| RouteState::for_location(&location))
    }

    /// Make `state` current, returning the previous one
    pub fn commit(&mut self, state: RouteState) -> RouteState {
        std::mem::replace(&mut self.state, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_no_section() {
        assert_eq!(Router::new().state(), &RouteState::NoSection);
    }

    #[test]
    fn test_resolve_post() {
        let state = Router::resolve("#/blog/a").unwrap();
        assert_eq!(
            state,
            RouteState::PostSelected {
                section: "blog".to_string(),
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_section() {
        let state = Router::resolve("#/blog").unwrap();
        assert_eq!(state, RouteState::SectionSelected("blog".to_string()));
    }

    #[test]
    fn test_resolve_ignores_empty_hash() {
        assert!(Router::resolve("").is_none());
        assert!(Router::resolve("#/").is_none());
    }

    #[test]
    fn test_resolve_does_not_touch_state() {
        let router = Router::new();
        let _ = Router::resolve("#/blog/a");
        assert_eq!(router.state(), &RouteState::NoSection);
    }

    #[test]
    fn test_commit_returns_previous() {
        let mut router = Router::new();
        let home = RouteState::SectionSelected("home".to_string());
        let previous = router.commit(home.clone());
        assert_eq!(previous, RouteState::NoSection);
        let previous = router.commit(RouteState::SectionSelected("blog".to_string()));
        assert_eq!(previous, home);
        assert_eq!(
            router.state(),
            &RouteState::SectionSelected("blog".to_string())
        );
    }

    #[test]
    fn test_display() {
        let state = RouteState::PostSelected {
            section: "blog".into(),
            slug: "a".into(),
        };
        assert_eq!(state.to_string(), "post blog/a");
    }
}
