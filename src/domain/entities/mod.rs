//! Core domain entities.
//!
//! - [`Entry`] - One shortened URL: the original URL and its numeric short id

pub mod entry;

pub use entry::Entry;
