//! Browse binary - walks every page of a running users API and prints it
//!
//! Usage:
//!   cargo run --bin browse          # Labels in LANGUAGE (default en)
//!   cargo run --bin browse -- tr    # Labels in Turkish
//!
//! Optional environment variables:
//! - USERS_API_URL (defaults to http://localhost:$PORT)
//! - PAGE_SIZE (defaults to 3)
//! - LANGUAGE (defaults to en)

use anyhow::{bail, Result};
use tracing::info;
use user_directory::{
    client::ApiClient,
    config::Config,
    home::HomePage,
    i18n::{Language, LanguageSelector},
    list_view::{LoadState, UserList},
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("browse=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.language.clone());
    let language = match Language::from_code(&code) {
        Ok(language) => language,
        Err(e) => {
            let available: Vec<String> = LanguageSelector::new()
                .options()
                .into_iter()
                .map(|option| format!("{} ({})", option.language.code(), option.title))
                .collect();
            bail!("{}. Available: {}", e, available.join(", "));
        }
    };

    info!(
        "Browsing {} in {} ({} per page)",
        config.api_base_url,
        language.name(),
        config.page_size
    );

    let mut selector = LanguageSelector::new();
    selector.select(language);
    let mut home = HomePage {
        list: UserList::with_page_size(ApiClient::new(&config.api_base_url), config.page_size),
        selector,
    };

    home.list.load().await;
    loop {
        if let LoadState::Failed(e) = home.list.state() {
            bail!("Could not load page {}: {}", home.list.current_page(), e);
        }
        println!("{}", home.render());
        if !home.list.next().await {
            break;
        }
    }

    Ok(())
}
