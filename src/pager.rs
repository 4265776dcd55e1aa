//! Page slicing and query-parameter handling for the users listing.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Page size used when a request omits `size` or sends something unusable.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// A bounded slice of a collection plus the metadata needed to navigate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.total_pages
            .checked_sub(1)
            .is_some_and(|last| self.page < last)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn is_last(&self) -> bool {
        self.total_pages.checked_sub(1) == Some(self.page)
    }
}

/// Slice `items` into the requested page.
///
/// A page index past the end yields empty content rather than an error.
pub fn get_page<T: Clone>(items: &[T], page: usize, size: NonZeroUsize) -> Page<T> {
    let size = size.get();
    let content = page
        .checked_mul(size)
        .filter(|start| *start < items.len())
        .map(|start| {
            let end = start.saturating_add(size).min(items.len());
            items[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        content,
        page,
        size,
        total_pages: items.len().div_ceil(size),
    }
}

/// Validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page: usize, size: NonZeroUsize) -> Self {
        Self { page, size }
    }

    /// Build a request from raw `page`/`size` query values.
    ///
    /// Missing or unparsable `page` becomes 0; missing, unparsable or zero
    /// `size` becomes [`DEFAULT_PAGE_SIZE`].
    pub fn from_query(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page.and_then(parse_leading_int).unwrap_or(0);
        let size = size
            .and_then(parse_leading_int)
            .and_then(NonZeroUsize::new)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, size }
    }

    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        get_page(items, self.page, self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Parse the leading run of decimal digits, skipping leading whitespace.
///
/// `"3abc"` parses as 3. Signs are not accepted, so negative values are
/// treated as absent.
fn parse_leading_int(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{fixture_users, User};
    use proptest::prelude::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("Size should be non-zero")
    }

    fn usernames(page: &Page<User>) -> Vec<&str> {
        page.content.iter().map(|u| u.username.as_str()).collect()
    }

    // ==================== get_page Tests ====================

    #[test]
    fn test_first_page_with_default_size() {
        let page = get_page(&fixture_users(), 0, DEFAULT_PAGE_SIZE);
        assert_eq!(
            usernames(&page),
            vec!["user1", "user2", "user3", "user4", "user5"]
        );
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 5);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_second_page_with_default_size_is_clipped() {
        let page = get_page(&fixture_users(), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(usernames(&page), vec!["user6", "user7"]);
        assert_eq!(page.total_pages, 2);
        assert!(page.is_last());
    }

    #[test]
    fn test_size_three_walks_three_pages() {
        let users = fixture_users();
        let first = get_page(&users, 0, size(3));
        let second = get_page(&users, 1, size(3));
        let third = get_page(&users, 2, size(3));

        assert_eq!(usernames(&first), vec!["user1", "user2", "user3"]);
        assert_eq!(usernames(&second), vec!["user4", "user5", "user6"]);
        assert_eq!(usernames(&third), vec!["user7"]);
        assert_eq!(third.total_pages, 3);
        assert!(!third.has_next());
        assert!(third.has_previous());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = get_page(&fixture_users(), 10, size(3));
        assert!(page.content.is_empty());
        assert_eq!(page.page, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        let page = get_page(&fixture_users(), usize::MAX, size(3));
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_navigation_flags_at_maximal_index() {
        let page = Page::<User> {
            content: Vec::new(),
            page: usize::MAX,
            size: 3,
            total_pages: usize::MAX,
        };
        assert!(!page.has_next());
        assert!(page.has_previous());
        assert!(!page.is_last());
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let page = get_page::<User>(&[], 0, DEFAULT_PAGE_SIZE);
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert!(!page.is_last());
    }

    #[test]
    fn test_get_page_leaves_input_untouched() {
        let users = fixture_users();
        let before = users.clone();
        let _ = get_page(&users, 1, size(2));
        assert_eq!(users, before);
    }

    #[test]
    fn test_page_serializes_with_camel_case_keys() {
        let page = get_page(&fixture_users(), 1, DEFAULT_PAGE_SIZE);
        let json = serde_json::to_value(&page).expect("Should serialize");
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["page"], 1);
        assert_eq!(json["size"], 5);
        assert_eq!(json["content"].as_array().map(Vec::len), Some(2));
    }

    // ==================== PageRequest Tests ====================

    #[test]
    fn test_from_query_defaults_when_missing() {
        let request = PageRequest::from_query(None, None);
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 0);
        assert_eq!(request.size.get(), 5);
    }

    #[test]
    fn test_from_query_parses_numbers() {
        let request = PageRequest::from_query(Some("2"), Some("3"));
        assert_eq!(request.page, 2);
        assert_eq!(request.size.get(), 3);
    }

    #[test]
    fn test_from_query_non_numeric_falls_back() {
        let request = PageRequest::from_query(Some("abc"), Some("lots"));
        assert_eq!(request.page, 0);
        assert_eq!(request.size.get(), 5);
    }

    #[test]
    fn test_from_query_zero_size_falls_back() {
        let request = PageRequest::from_query(Some("1"), Some("0"));
        assert_eq!(request.page, 1);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_query_negative_values_fall_back() {
        let request = PageRequest::from_query(Some("-1"), Some("-3"));
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_from_query_uses_leading_digits() {
        let request = PageRequest::from_query(Some(" 1x"), Some("3abc"));
        assert_eq!(request.page, 1);
        assert_eq!(request.size.get(), 3);
    }

    #[test]
    fn test_request_slice_matches_get_page() {
        let users = fixture_users();
        let request = PageRequest::new(1, size(3));
        assert_eq!(request.slice(&users), get_page(&users, 1, size(3)));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_total_pages_is_ceiling(len in 0usize..200, n in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let page = get_page(&items, 0, size(n));
            prop_assert_eq!(page.total_pages, (len + n - 1) / n);
        }

        #[test]
        fn prop_pages_reassemble_collection(len in 0usize..200, n in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let total = items.len().div_ceil(n);
            let mut joined = Vec::new();
            for index in 0..total {
                let page = get_page(&items, index, size(n));
                prop_assert!(!page.content.is_empty());
                prop_assert!(page.content.len() <= n);
                prop_assert_eq!(page.is_last(), index == total - 1);
                joined.extend(page.content);
            }
            prop_assert_eq!(joined, items);
        }
    }
}
