/// A single company/role search pair and the query string sent for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub company: String,
    pub role: String,
    pub text: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(company: &str, role: &str) -> Self {
        Self {
            company: company.to_string(),
            role: role.to_string(),
            text: format!("site:linkedin.com/in/ \"{role}\" \"{company}\""),
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Cross product of companies × roles, companies in the outer loop.
#[must_use]
pub fn build_queries(companies: &[String], roles: &[String]) -> Vec<SearchQuery> {
    companies
        .iter()
        .flat_map(|company| roles.iter().map(move |role| SearchQuery::new(company, role)))
        .collect()
}
