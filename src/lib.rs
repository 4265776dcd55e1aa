//! Paginated user listing with localized labels.
//!
//! - [`pager`] slices a collection into pages
//! - [`list_view`] and [`home`] model the list widget and its language selector
//! - [`server`] and [`client`] expose and consume the users API

pub mod client;
pub mod config;
pub mod home;
pub mod i18n;
pub mod list_view;
pub mod pager;
pub mod retry;
pub mod server;
pub mod source;
pub mod user;
