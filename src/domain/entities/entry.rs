//! Entry entity representing one shortened URL.

/// The association between an original URL and its short id.
///
/// Entries are created once, on the first registration of a previously unseen
/// URL, and are never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub short_id: i64,
    pub original: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(short_id: i64, original: impl Into<String>) -> Self {
        Self {
            short_id,
            original: original.into(),
        }
    }
}
