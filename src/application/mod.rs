//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::registry_service::ShortenerRegistry`] - Short id allocation and lookup
//! - [`services::url_validator::UrlValidator`] - Acceptance checks for submitted URLs

pub mod services;
