use chrono::{DateTime, Utc};

/// A repository record as supplied by the listing source.
///
/// Every field except `name` is optional on the GitHub side; absent values
/// are carried as `None`/`false`/`0` and never treated as errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub has_pages: bool,
    pub language: Option<String>,
    pub updated_at: Option<String>, // raw ISO-8601 timestamp from the API
    pub stargazers_count: u32,
    pub html_url: Option<String>,
}

impl Repository {
    /// Parse the last-updated timestamp. Malformed timestamps degrade to
    /// `None` rather than erroring, so recency scoring silently skips them.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// True if the homepage field is set to a non-empty URL
    pub fn has_homepage(&self) -> bool {
        self.homepage.as_deref().is_some_and(|h| !h.is_empty())
    }
}
