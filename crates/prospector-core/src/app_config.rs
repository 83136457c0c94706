/// Runtime settings read from the process environment.
///
/// Search inputs (companies, roles, output paths) come from CLI flags; this
/// struct only carries the API credential and the HTTP client tuning knobs.
#[derive(Clone)]
pub struct AppConfig {
    pub serpapi_api_key: String,
    pub serpapi_base_url: String,
    pub request_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub retry_max_delay_ms: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("serpapi_api_key", &"[redacted]")
            .field("serpapi_base_url", &self.serpapi_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("retry_max_delay_ms", &self.retry_max_delay_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
