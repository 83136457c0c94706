use serde::{Deserialize, Serialize};

/// Column order of every CSV export. Matches the field order of [`Person`].
pub const CSV_HEADER: [&str; 5] = [
    "name",
    "title",
    "company_filter",
    "role_filter",
    "profile_url",
];

/// One LinkedIn profile found during a run.
///
/// `profile_url` is unique within a run; `company_filter` and `role_filter`
/// record the query pair that first surfaced the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub company_filter: String,
    pub role_filter: String,
    pub profile_url: String,
}

/// A search result whose link points at a LinkedIn member profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHit {
    /// Raw result title, usually `"Name - Title | LinkedIn"`.
    pub title: String,
    pub url: String,
}
