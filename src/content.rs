// Static site content: headings, copy, contact details, and image slots

use crate::page::Page;

/// One image referenced by a page.
///
/// `deferred` holds a source that has not been promoted into `source`
/// yet; the preloader clears it once, shortly after startup.
#[derive(Clone, Debug)]
pub struct ImageSlot {
    pub alt: String,
    pub source: Option<String>,
    pub deferred: Option<String>,
}

impl ImageSlot {
    pub fn eager(alt: &str, uri: &str) -> Self {
        Self {
            alt: alt.to_string(),
            source: Some(uri.to_string()),
            deferred: None,
        }
    }

    pub fn lazy(alt: &str, uri: &str) -> Self {
        Self {
            alt: alt.to_string(),
            source: None,
            deferred: Some(uri.to_string()),
        }
    }

    /// Source to render, if the image was eager or has been promoted.
    pub fn resolved(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Promote the deferred marker into the real source. Returns the
    /// promoted URI, or None when there is nothing left to do.
    pub fn promote(&mut self) -> Option<String> {
        let uri = self.deferred.take()?;
        self.source = Some(uri.clone());
        Some(uri)
    }
}

#[derive(Clone, Debug)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageContent {
    pub heading: String,
    pub intro: String,
    pub sections: Vec<Section>,
    pub images: Vec<ImageSlot>,
}

/// Contact details shown next to the form.
#[derive(Clone, Debug)]
pub struct ContactInfo {
    pub email: String,
    pub website: String,
}

pub struct SiteContent {
    home: PageContent,
    about: PageContent,
    services: PageContent,
    contact: PageContent,
    pub contact_info: ContactInfo,
}

impl SiteContent {
    pub fn page(&self, page: Page) -> &PageContent {
        match page {
            Page::Home => &self.home,
            Page::About => &self.about,
            Page::Services => &self.services,
            Page::Contact => &self.contact,
        }
    }

    pub fn page_mut(&mut self, page: Page) -> &mut PageContent {
        match page {
            Page::Home => &mut self.home,
            Page::About => &mut self.about,
            Page::Services => &mut self.services,
            Page::Contact => &mut self.contact,
        }
    }

    /// The bundled brochure content. The home image is eager so the
    /// first screen never shows a placeholder; everything else defers
    /// to the preloader.
    pub fn bundled() -> Self {
        Self {
            home: PageContent {
                heading: "Welcome to Atrium".to_string(),
                intro: "A small studio for calm, durable software.".to_string(),
                sections: vec![
                    Section::new(
                        "What we do",
                        "We design and build focused tools that stay out of your way. \
                         No dashboards for the sake of dashboards, no feature treadmill.",
                    ),
                    Section::new(
                        "Where to start",
                        "Have a look at our services, read about the people behind the \
                         studio, or drop us a line on the contact page.",
                    ),
                ],
                images: vec![ImageSlot::eager(
                    "Studio entrance",
                    "file://assets/images/home_hero.png",
                )],
            },
            about: PageContent {
                heading: "About us".to_string(),
                intro: "Three people, one workshop, twelve years of shipped software."
                    .to_string(),
                sections: vec![
                    Section::new(
                        "The studio",
                        "Atrium started as a weekend collaboration and never stopped. \
                         We keep the team deliberately small so every project gets the \
                         same pair of hands from first sketch to last release.",
                    ),
                    Section::new(
                        "How we work",
                        "Short feedback loops, plain language, and working software \
                         early. We would rather show you a rough build in week two \
                         than a slide deck in week six.",
                    ),
                ],
                images: vec![ImageSlot::lazy(
                    "The team",
                    "file://assets/images/about_team.png",
                )],
            },
            services: PageContent {
                heading: "Services".to_string(),
                intro: "Design, build, and care for the long tail.".to_string(),
                sections: vec![
                    Section::new(
                        "Product design",
                        "Interface and interaction design for desktop and web, from \
                         early wireframes to a polished, buildable handoff.",
                    ),
                    Section::new(
                        "Engineering",
                        "Native applications and the services behind them, built with \
                         boring, proven tools and delivered with tests.",
                    ),
                    Section::new(
                        "Maintenance",
                        "We stay around after launch. Dependency updates, small \
                         features, and the occasional rescue of a codebase someone \
                         else left behind.",
                    ),
                ],
                images: vec![ImageSlot::lazy(
                    "Service overview",
                    "file://assets/images/services_overview.png",
                )],
            },
            contact: PageContent {
                heading: "Contact".to_string(),
                intro: "Tell us what you are building.".to_string(),
                sections: vec![Section::new(
                    "Office hours",
                    "We read every message within one working day. For anything \
                     urgent, the email address below reaches all of us.",
                )],
                images: vec![ImageSlot::lazy(
                    "Our office",
                    "file://assets/images/contact_office.png",
                )],
            },
            contact_info: ContactInfo {
                email: "hello@atrium.example".to_string(),
                website: "https://atrium.example".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_clears_marker() {
        let mut slot = ImageSlot::lazy("pic", "foo.png");
        assert_eq!(slot.resolved(), None);
        assert_eq!(slot.promote().as_deref(), Some("foo.png"));
        assert_eq!(slot.resolved(), Some("foo.png"));
        assert!(slot.deferred.is_none());
        // A cleared marker yields nothing further
        assert_eq!(slot.promote(), None);
    }

    #[test]
    fn test_eager_slot_has_no_marker() {
        let mut slot = ImageSlot::eager("pic", "bar.png");
        assert_eq!(slot.resolved(), Some("bar.png"));
        assert_eq!(slot.promote(), None);
    }

    #[test]
    fn test_bundled_content_covers_every_page() {
        let content = SiteContent::bundled();
        for page in Page::ALL {
            let body = content.page(page);
            assert!(!body.heading.is_empty());
            assert!(!body.sections.is_empty());
            assert!(!body.images.is_empty());
        }
    }
}
