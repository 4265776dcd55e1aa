use crate::list_view::LIST_PAGE_SIZE;
use anyhow::{Context, Result};
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Client
    pub api_base_url: String,
    pub page_size: NonZeroUsize,

    // Labels
    pub language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,

            api_base_url: std::env::var("USERS_API_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),

            // Zero or garbage falls back to the list default
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .and_then(NonZeroUsize::new)
                .unwrap_or(LIST_PAGE_SIZE),

            language: std::env::var("LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        })
    }
}
