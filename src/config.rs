const DEFAULT_USER_AGENT: &str = "StaticTextFetcher/1.0";

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Root path prefixed to module-derived URLs (e.g. `"/app"` or a full
    /// base like `"https://host/app"`).
    pub html_root: String,
    /// User agent string for HTTP requests
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            html_root: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
