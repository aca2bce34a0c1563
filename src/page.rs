// Page identity and ordering for the fixed four-page site

use std::fmt;

/// The closed set of pages the application can show.
///
/// Exactly one page is visible at any time. `ALL` fixes the order used
/// by keyboard navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Services, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "services" => Some(Page::Services),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Canonical URL for history entries: the site root for the home
    /// page, a fragment URL for everything else.
    pub fn canonical_url(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            other => format!("/#{}", other.slug()),
        }
    }

    /// Resolve a startup location. Accepts a bare slug, a `#slug`
    /// fragment, or a `/#slug` path; anything unrecognized falls back
    /// to the home page.
    pub fn resolve_location(location: &str) -> Self {
        let fragment = location
            .trim()
            .trim_start_matches('/')
            .trim_start_matches('#');
        match Self::from_slug(fragment) {
            Some(page) => page,
            None => {
                if !fragment.is_empty() {
                    tracing::debug!(fragment, "unrecognized location, falling back to home");
                }
                Page::Home
            }
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Neighbor to the left in the fixed order; None at the first page.
    pub fn previous(self) -> Option<Self> {
        let index = self.position();
        if index > 0 {
            Some(Self::ALL[index - 1])
        } else {
            None
        }
    }

    /// Neighbor to the right in the fixed order; None at the last page.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("news"), None);
    }

    #[test]
    fn test_canonical_urls() {
        assert_eq!(Page::Home.canonical_url(), "/");
        assert_eq!(Page::About.canonical_url(), "/#about");
        assert_eq!(Page::Services.canonical_url(), "/#services");
        assert_eq!(Page::Contact.canonical_url(), "/#contact");
    }

    #[test]
    fn test_resolve_location_fragment() {
        assert_eq!(Page::resolve_location("#services"), Page::Services);
        assert_eq!(Page::resolve_location("/#about"), Page::About);
        assert_eq!(Page::resolve_location("contact"), Page::Contact);
    }

    #[test]
    fn test_resolve_location_defaults_to_home() {
        assert_eq!(Page::resolve_location(""), Page::Home);
        assert_eq!(Page::resolve_location("/"), Page::Home);
        assert_eq!(Page::resolve_location("#blog"), Page::Home);
    }

    #[test]
    fn test_neighbors_clamped_at_both_ends() {
        assert_eq!(Page::Home.previous(), None);
        assert_eq!(Page::Contact.next(), None);
        assert_eq!(Page::Home.next(), Some(Page::About));
        assert_eq!(Page::Contact.previous(), Some(Page::Services));
    }

    #[test]
    fn test_order_is_complete() {
        let mut walked = vec![Page::ALL[0]];
        while let Some(next) = walked[walked.len() - 1].next() {
            walked.push(next);
        }
        assert_eq!(walked, Page::ALL);
    }
}
