//! Domain layer containing business entities and repository contracts.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Registration Flow
//!
//! 1. HTTP handler validates the submitted URL (see
//!    [`crate::application::services::UrlValidator`])
//! 2. [`crate::application::services::ShortenerRegistry`] looks up an existing entry
//! 3. On a miss, [`repositories::EntryRepository::insert_if_absent`] allocates the
//!    next short id atomically

pub mod entities;
pub mod repositories;
