//! Business logic services for the application layer.

pub mod registry_service;
pub mod url_validator;

pub use registry_service::ShortenerRegistry;
pub use url_validator::{RejectReason, UrlValidator, ValidationPolicy, Verdict};
