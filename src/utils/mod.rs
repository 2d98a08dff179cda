//! Utility functions for URL processing.
//!
//! - [`url_shape`] - Syntactic URL checks shared by the validator

pub mod url_shape;
