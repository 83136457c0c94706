pub mod client;
pub mod error;
pub mod profile;
pub(crate) mod retry;
pub mod types;

pub use client::SerpClient;
pub use error::SerpError;
pub use profile::{extract_profile_hits, LINKEDIN_PROFILE_PREFIX};
pub use retry::RetryPolicy;
pub use types::{OrganicResult, SearchResponse};
