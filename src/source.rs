//! Data sources the list view can page through.

use crate::pager::{Page, PageRequest};
use crate::user::User;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("users API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode users page: {0}")]
    Decode(String),
}

impl FetchError {
    /// Transport failures and 5xx responses may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Decode(_) => false,
        }
    }
}

/// Something that can produce a page of users.
pub trait UserSource {
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page<User>, FetchError>> + Send;
}

/// Serves pages straight from an in-memory collection.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    users: Vec<User>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserSource for InMemorySource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<User>, FetchError> {
        Ok(request.slice(&self.users))
    }
}
