//! Headless user list: load state, page navigation and rendering.
//!
//! The list starts `Pending` and shows a busy indicator. `load` settles it into
//! `Loaded` or `Failed`. Navigation is only possible from `Loaded`, and only in
//! the directions the current page allows.

use crate::i18n::{LabelKey, Language};
use crate::pager::{Page, PageRequest};
use crate::source::{FetchError, UserSource};
use crate::user::User;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{info, warn};

/// Page size the list asks for unless told otherwise.
pub const LIST_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug)]
pub enum LoadState {
    Pending,
    Loaded(Page<User>),
    Failed(FetchError),
}

/// What the list shows right now, with labels already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub header: &'static str,
    pub usernames: Vec<String>,
    /// Busy indicator
    pub busy: bool,
    pub next_link: Option<&'static str>,
    pub previous_link: Option<&'static str>,
    pub error: Option<String>,
}

impl RenderedList {
    /// True if any rendered text equals `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.header == text
            || self.usernames.iter().any(|u| u == text)
            || self.next_link == Some(text)
            || self.previous_link == Some(text)
    }
}

impl fmt::Display for RenderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        if self.busy {
            writeln!(f, "  ...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "  ! {}", error)?;
        }
        for username in &self.usernames {
            writeln!(f, "  {}", username)?;
        }
        let links: Vec<&str> = [self.previous_link, self.next_link]
            .into_iter()
            .flatten()
            .collect();
        if !links.is_empty() {
            writeln!(f, "{}", links.join("   "))?;
        }
        Ok(())
    }
}

/// Paged list of users backed by a [`UserSource`].
pub struct UserList<S> {
    source: S,
    page: usize,
    size: NonZeroUsize,
    state: LoadState,
}

impl<S: UserSource> UserList<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, LIST_PAGE_SIZE)
    }

    pub fn with_page_size(source: S, size: NonZeroUsize) -> Self {
        Self {
            source,
            page: 0,
            size,
            state: LoadState::Pending,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Index of the page most recently requested.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    pub fn has_next(&self) -> bool {
        matches!(&self.state, LoadState::Loaded(page) if page.has_next())
    }

    pub fn has_previous(&self) -> bool {
        matches!(&self.state, LoadState::Loaded(page) if page.has_previous())
    }

    /// Fetch the current page and settle the state.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Pending;
        let request = PageRequest::new(self.page, self.size);
        self.state = match self.source.fetch_page(request).await {
            Ok(page) => {
                info!(
                    "Loaded page {} of {} ({} users)",
                    page.page.saturating_add(1),
                    page.total_pages,
                    page.content.len()
                );
                LoadState::Loaded(page)
            }
            Err(e) => {
                warn!("Failed to load page {}: {}", self.page, e);
                LoadState::Failed(e)
            }
        };
        &self.state
    }

    /// Move to the page after the one shown, if the next link is showing.
    ///
    /// Returns whether navigation happened.
    pub async fn next(&mut self) -> bool {
        let target = match &self.state {
            LoadState::Loaded(page) if page.has_next() => page.page.checked_add(1),
            _ => None,
        };
        self.go_to(target).await
    }

    /// Move to the page before the one shown, if the previous link is showing.
    pub async fn previous(&mut self) -> bool {
        let target = match &self.state {
            LoadState::Loaded(page) if page.has_previous() => page.page.checked_sub(1),
            _ => None,
        };
        self.go_to(target).await
    }

    // Targets come from the served page, which may differ from the requested one.
    async fn go_to(&mut self, target: Option<usize>) -> bool {
        let Some(page) = target else {
            return false;
        };
        self.page = page;
        self.load().await;
        true
    }

    /// Re-fetch the current page after a failure.
    pub async fn retry(&mut self) -> bool {
        if !matches!(self.state, LoadState::Failed(_)) {
            return false;
        }
        self.load().await;
        true
    }

    /// Render with every label resolved in `language`.
    pub fn render(&self, language: Language) -> RenderedList {
        let strings = language.strings();
        let mut rendered = RenderedList {
            header: strings.get(LabelKey::Users),
            usernames: Vec::new(),
            busy: false,
            next_link: None,
            previous_link: None,
            error: None,
        };

        match &self.state {
            LoadState::Pending => rendered.busy = true,
            LoadState::Failed(e) => rendered.error = Some(e.to_string()),
            LoadState::Loaded(page) => {
                rendered.usernames = page.content.iter().map(|u| u.username.clone()).collect();
                if page.has_next() {
                    rendered.next_link = Some(strings.get(LabelKey::NextPage));
                }
                if page.has_previous() {
                    rendered.previous_link = Some(strings.get(LabelKey::PreviousPage));
                }
            }
        }

        rendered
    }
}
