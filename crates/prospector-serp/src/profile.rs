use prospector_core::ProfileHit;

use crate::types::OrganicResult;

/// Links must start with this to count as a member profile.
pub const LINKEDIN_PROFILE_PREFIX: &str = "https://www.linkedin.com/in/";

/// Keep only results that link to a LinkedIn member profile, in result order.
#[must_use]
pub fn extract_profile_hits(results: &[OrganicResult]) -> Vec<ProfileHit> {
    results
        .iter()
        .filter(|r| r.link.starts_with(LINKEDIN_PROFILE_PREFIX))
        .map(|r| ProfileHit {
            title: r.title.clone(),
            url: r.link.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, link: &str) -> OrganicResult {
        OrganicResult {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn keeps_only_profile_links() {
        let results = vec![
            result("Jane Doe - PM", "https://www.linkedin.com/in/janedoe"),
            result("Google | LinkedIn", "https://www.linkedin.com/company/google"),
            result("Jane Doe - PM", "https://linkedin.com/in/janedoe"),
            result("John Roe - PM", "https://www.linkedin.com/in/johnroe/"),
        ];

        let hits = extract_profile_hits(&results);

        let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.linkedin.com/in/janedoe",
                "https://www.linkedin.com/in/johnroe/"
            ]
        );
        assert_eq!(hits[0].title, "Jane Doe - PM");
    }

    #[test]
    fn title_content_does_not_rescue_non_profile_link() {
        let results = vec![result(
            "Jane Doe - Product Manager | LinkedIn",
            "https://example.com/in/janedoe",
        )];
        assert!(extract_profile_hits(&results).is_empty());
    }
}
