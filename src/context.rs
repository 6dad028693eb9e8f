//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current search term - read
    pub search_term: ReadSignal<String>,
    /// Current search term - write
    set_search_term: WriteSignal<String>,
    /// Current 1-based page within the filtered view - read
    pub current_page: ReadSignal<usize>,
    /// Current 1-based page within the filtered view - write
    set_current_page: WriteSignal<usize>,
}

impl AppContext {
    pub fn new(
        search_term: (ReadSignal<String>, WriteSignal<String>),
        current_page: (ReadSignal<usize>, WriteSignal<usize>),
    ) -> Self {
        Self {
            search_term: search_term.0,
            set_search_term: search_term.1,
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Update the search term. The page index always snaps back to 1 so
    /// the narrowed view starts at its first page.
    pub fn set_search(&self, term: String) {
        self.set_search_term.set(term);
        self.set_current_page.set(1);
    }

    /// Jump to a page produced by the page selector
    pub fn go_to_page(&self, page: usize) {
        self.set_current_page.set(page);
    }
}
