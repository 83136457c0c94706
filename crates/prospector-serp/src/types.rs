//! `SerpAPI` response types.
//!
//! Only the fields this tool reads are modelled; everything else in the
//! response is ignored by serde.

use serde::Deserialize;

/// Top-level body of a `/search` response.
///
/// `organic_results` is absent when Google returned nothing, so it defaults
/// to an empty list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One organic (non-ad) search result.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}
