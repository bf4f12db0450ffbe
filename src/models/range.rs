//! Filters for listing blocks.
//!
//! Bounds are compared against the stored text with SQLite's `date()`,
//! so a bound only contributes its calendar day and comparisons are
//! lexical on the stored RFC 3339 strings.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRange {
    All,
    /// `start > date(bound)`
    AfterStart(String),
    /// `end < date(bound)`
    BeforeEnd(String),
    /// `start > date(start) AND end < date(end)`
    Within { start: String, end: String },
}

impl BlockRange {
    pub fn from_bounds(after: Option<String>, before: Option<String>) -> Self {
        match (after, before) {
            (None, None) => BlockRange::All,
            (Some(s), None) => BlockRange::AfterStart(s),
            (None, Some(e)) => BlockRange::BeforeEnd(e),
            (Some(start), Some(end)) => BlockRange::Within { start, end },
        }
    }
}
