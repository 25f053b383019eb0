#[derive(Clone)]
pub struct AppConfig {
    pub bff_base_url: String,
    pub bff_bearer_token: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bff_base_url", &self.bff_base_url)
            .field(
                "bff_bearer_token",
                &self.bff_bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}
