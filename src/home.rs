use crate::i18n::{Language, LanguageSelector};
use crate::list_view::{RenderedList, UserList};
use crate::source::UserSource;

/// The user list together with the language selector that labels it.
///
/// The active language lives only in the selector and is handed to the list
/// on every render, so switching language never touches list state.
pub struct HomePage<S> {
    pub list: UserList<S>,
    pub selector: LanguageSelector,
}

impl<S: UserSource> HomePage<S> {
    pub fn new(source: S) -> Self {
        Self {
            list: UserList::new(source),
            selector: LanguageSelector::new(),
        }
    }

    pub fn with_language(source: S, language: Language) -> Self {
        let mut page = Self::new(source);
        page.selector.select(language);
        page
    }

    pub fn render(&self) -> RenderedList {
        self.list.render(self.selector.active())
    }
}
