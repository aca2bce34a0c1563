// Navigation state - current page, history, and the replay cursor

use crate::page::Page;

/// One browser-history style record: a page plus its canonical URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub page: Page,
    pub url: String,
}

impl HistoryEntry {
    fn for_page(page: Page) -> Self {
        Self {
            page,
            url: page.canonical_url(),
        }
    }
}

/// Single source of truth for which page is shown.
///
/// Exactly one page is current at any time; the history list always
/// contains at least the entry for the start page, and the cursor
/// always points at a valid entry.
pub struct NavigationState {
    current: Page,
    history: Vec<HistoryEntry>,
    history_index: usize,
}

impl NavigationState {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            history: vec![HistoryEntry::for_page(start)],
            history_index: 0,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn current_url(&self) -> &str {
        &self.history[self.history_index].url
    }

    /// Switch to `page`, pushing a new history entry. Returns false
    /// without touching anything when `page` is already current.
    pub fn navigate_to(&mut self, page: Page) -> bool {
        if page == self.current {
            return false;
        }

        // Remove any forward history before pushing the new entry
        self.history.truncate(self.history_index + 1);
        self.history.push(HistoryEntry::for_page(page));
        self.history_index = self.history.len() - 1;
        self.current = page;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    /// Step back in history, replaying the older entry. No new entry
    /// is pushed.
    pub fn go_back(&mut self) -> Option<Page> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].page;
            Some(self.current)
        } else {
            None
        }
    }

    /// Step forward in history. No new entry is pushed.
    pub fn go_forward(&mut self) -> Option<Page> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].page;
            Some(self.current)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_between_all_page_pairs() {
        for from in Page::ALL {
            for to in Page::ALL {
                if from == to {
                    continue;
                }
                let mut nav = NavigationState::new(from);
                assert!(nav.navigate_to(to));
                assert_eq!(nav.current(), to);
                assert_eq!(nav.current_url(), to.canonical_url());
                assert_eq!(nav.history.len(), 2);
                assert_eq!(nav.history[1].page, to);
            }
        }
    }

    #[test]
    fn test_navigate_to_current_is_a_no_op() {
        let mut nav = NavigationState::new(Page::About);
        assert!(!nav.navigate_to(Page::About));
        assert_eq!(nav.current(), Page::About);
        assert_eq!(nav.history.len(), 1);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_back_restores_previous_page() {
        let mut nav = NavigationState::new(Page::Home);
        nav.navigate_to(Page::Services);
        assert_eq!(nav.go_back(), Some(Page::Home));
        assert_eq!(nav.current(), Page::Home);
        assert_eq!(nav.current_url(), "/");
        // Back at the first entry there is nothing left to replay
        assert_eq!(nav.go_back(), None);
    }

    #[test]
    fn test_forward_after_back() {
        let mut nav = NavigationState::new(Page::Home);
        nav.navigate_to(Page::About);
        nav.navigate_to(Page::Contact);
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.current(), Page::Home);
        assert_eq!(nav.go_forward(), Some(Page::About));
        assert_eq!(nav.go_forward(), Some(Page::Contact));
        assert_eq!(nav.go_forward(), None);
    }

    #[test]
    fn test_new_navigation_truncates_forward_history() {
        let mut nav = NavigationState::new(Page::Home);
        nav.navigate_to(Page::About);
        nav.navigate_to(Page::Services);
        nav.go_back();
        nav.navigate_to(Page::Contact);
        assert!(!nav.can_go_forward());
        assert_eq!(nav.history.len(), 3);
        assert_eq!(nav.go_back(), Some(Page::About));
        assert_eq!(nav.go_back(), Some(Page::Home));
    }

    #[test]
    fn test_start_page_from_fragment() {
        let nav = NavigationState::new(Page::resolve_location("#services"));
        assert_eq!(nav.current(), Page::Services);
        assert_eq!(nav.current_url(), "/#services");
    }
}
