// One-shot preloader that promotes deferred page images after startup

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::content::SiteContent;
use crate::layout;
use crate::page::Page;

/// Promotes lazy image markers on inactive pages once, shortly after
/// launch, so switching pages does not wait on first-view loads.
///
/// Fire and forget: absence of deferred images is a normal, silent
/// outcome, and the pass never runs a second time.
pub struct ContentPreloader {
    deadline: Instant,
    preloaded: HashSet<String>,
    done: bool,
}

impl ContentPreloader {
    pub fn new(now: Instant) -> Self {
        Self {
            deadline: now + Duration::from_millis(layout::PRELOAD_DELAY_MS),
            preloaded: HashSet::new(),
            done: false,
        }
    }

    /// Run the promotion pass if the startup delay has elapsed.
    ///
    /// Returns the URIs promoted by this call so the caller can warm
    /// the image loader; later calls return nothing.
    pub fn tick(&mut self, now: Instant, content: &mut SiteContent, active: Page) -> Vec<String> {
        if self.done || now < self.deadline {
            return Vec::new();
        }
        self.done = true;

        let mut promoted = Vec::new();
        for page in Page::ALL {
            if page == active {
                continue;
            }
            for slot in &mut content.page_mut(page).images {
                if let Some(uri) = slot.promote() {
                    self.preloaded.insert(uri.clone());
                    promoted.push(uri);
                }
            }
        }
        promoted
    }

    pub fn pending(&self) -> bool {
        !self.done
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageSlot;

    fn content_with_lazy_everywhere() -> SiteContent {
        let mut content = SiteContent::bundled();
        for page in Page::ALL {
            content.page_mut(page).images = vec![ImageSlot::lazy(
                page.label(),
                &format!("{}.png", page.slug()),
            )];
        }
        content
    }

    #[test]
    fn test_nothing_happens_before_the_deadline() {
        let t0 = Instant::now();
        let mut preloader = ContentPreloader::new(t0);
        let mut content = content_with_lazy_everywhere();

        let promoted = preloader.tick(t0, &mut content, Page::Home);
        assert!(promoted.is_empty());
        assert!(preloader.pending());
        assert!(content.page(Page::About).images[0].resolved().is_none());
    }

    #[test]
    fn test_inactive_pages_are_promoted_once() {
        let t0 = Instant::now();
        let mut preloader = ContentPreloader::new(t0);
        let mut content = content_with_lazy_everywhere();

        let after = t0 + Duration::from_millis(layout::PRELOAD_DELAY_MS + 1);
        let mut promoted = preloader.tick(after, &mut content, Page::Home);
        promoted.sort();
        assert_eq!(promoted, vec!["about.png", "contact.png", "services.png"]);

        // The active page keeps its marker untouched
        let home = &content.page(Page::Home).images[0];
        assert!(home.resolved().is_none());
        assert!(home.deferred.is_some());

        // Promoted slots carry the real source and no marker
        let about = &content.page(Page::About).images[0];
        assert_eq!(about.resolved(), Some("about.png"));
        assert!(about.deferred.is_none());

        assert!(preloader.preloaded.contains("services.png"));
        assert!(!preloader.pending());
    }

    #[test]
    fn test_second_run_finds_nothing() {
        let t0 = Instant::now();
        let mut preloader = ContentPreloader::new(t0);
        let mut content = content_with_lazy_everywhere();

        let after = t0 + Duration::from_secs(2);
        assert_eq!(preloader.tick(after, &mut content, Page::Home).len(), 3);
        assert!(preloader
            .tick(after + Duration::from_secs(1), &mut content, Page::Home)
            .is_empty());
    }

    #[test]
    fn test_no_deferred_images_is_a_silent_outcome() {
        let t0 = Instant::now();
        let mut preloader = ContentPreloader::new(t0);
        let mut content = SiteContent::bundled();
        for page in Page::ALL {
            content.page_mut(page).images.clear();
        }

        let promoted = preloader.tick(t0 + Duration::from_secs(2), &mut content, Page::Home);
        assert!(promoted.is_empty());
        assert!(!preloader.pending());
    }
}
