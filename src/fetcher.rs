use std::sync::Arc;

use crate::cache::TextCache;
use crate::config::FetcherConfig;
use crate::errors::FetchError;
use crate::loading::{LoadingIndicator, NoopIndicator};
use crate::net::{HttpClient, ReqwestClient};

/// What to fetch: an explicit URL, used verbatim, or a dotted module name
/// (like `og.common.details.foo`) resolved against the configured HTML root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Url(String),
    Module(String),
}

/// A single fetch request.
#[derive(Debug, Clone)]
pub struct TextRequest {
    target: FetchTarget,
    do_not_cache: bool,
    clear_cache: bool,
    loading: Option<String>,
}

impl TextRequest {
    /// Request an explicit URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::with_target(FetchTarget::Url(url.into()))
    }

    /// Request a fragment by dotted module name.
    pub fn module(name: impl Into<String>) -> Self {
        Self::with_target(FetchTarget::Module(name.into()))
    }

    pub fn with_target(target: FetchTarget) -> Self {
        Self {
            target,
            do_not_cache: false,
            clear_cache: false,
            loading: None,
        }
    }

    /// Do not store the fetched text in the cache.
    pub fn do_not_cache(mut self) -> Self {
        self.do_not_cache = true;
        self
    }

    /// Drop any cached entry for the resolved URL before fetching.
    pub fn clear_cache(mut self) -> Self {
        self.clear_cache = true;
        self
    }

    /// Hint passed through to the loading indicator.
    pub fn loading(mut self, hint: impl Into<String>) -> Self {
        self.loading = Some(hint.into());
        self
    }
}

/// Fetches static HTML/text fragments, caching them by resolved URL.
///
/// One instance is meant to live for the application session; the cache it
/// owns lives and dies with it. Overlapping misses for the same URL both
/// reach the network; no in-flight de-duplication is performed.
pub struct TextFetcher {
    config: FetcherConfig,
    client: Arc<dyn HttpClient>,
    indicator: Arc<dyn LoadingIndicator>,
    cache: TextCache,
}

impl TextFetcher {
    /// Create a fetcher backed by a reqwest client and no loading UI.
    ///
    /// If `config` is `None`, [`FetcherConfig::default`] is used.
    pub fn new(config: Option<FetcherConfig>) -> Result<Self, FetchError> {
        let config = config.unwrap_or_default();
        let client = Arc::new(ReqwestClient::new(&config.user_agent)?);
        Ok(Self::with_collaborators(
            config,
            client,
            Arc::new(NoopIndicator),
        ))
    }

    /// Create a fetcher with explicit HTTP client and loading indicator
    /// collaborators.
    pub fn with_collaborators(
        config: FetcherConfig,
        client: Arc<dyn HttpClient>,
        indicator: Arc<dyn LoadingIndicator>,
    ) -> Self {
        Self {
            config,
            client,
            indicator,
            cache: TextCache::new(),
        }
    }

    /// The fetcher's cache, for inspection or explicit invalidation.
    pub fn cache(&self) -> &TextCache {
        &self.cache
    }

    /// Fetch the text for `request`.
    ///
    /// Cache hits resolve without touching the network. The loading
    /// indicator's start and end hooks each fire exactly once per call,
    /// hit or miss, success or failure.
    pub async fn fetch_text(&self, request: TextRequest) -> Result<String, FetchError> {
        // Resolution failures surface before the cache, the network, or the
        // indicator are touched.
        let url = self.resolve_url(&request.target)?;

        self.indicator.start_loading(request.loading.as_deref());
        let result = self.fetch_resolved(&url, &request).await;
        self.indicator.end_loading();
        result
    }

    async fn fetch_resolved(&self, url: &str, request: &TextRequest) -> Result<String, FetchError> {
        if request.clear_cache {
            self.cache.remove(url);
        }

        if let Some(text) = self.cache.get(url) {
            log::debug!("cache hit: {}", url);
            return Ok(text);
        }

        log::debug!("cache miss: {}", url);
        let response = self.client.get(url).await?;
        let text = response.text();
        if !request.do_not_cache {
            self.cache.insert(url, &text);
        }
        Ok(text)
    }

    fn resolve_url(&self, target: &FetchTarget) -> Result<String, FetchError> {
        match target {
            FetchTarget::Url(url) if url.is_empty() => Err(FetchError::InvalidConfig(
                "url must not be empty".to_string(),
            )),
            FetchTarget::Url(url) => Ok(url.clone()),
            FetchTarget::Module(name) if name.is_empty() => Err(FetchError::InvalidConfig(
                "module name must not be empty".to_string(),
            )),
            FetchTarget::Module(name) => Ok(module_path(&self.config.html_root, name)),
        }
    }
}

/// Maps a dotted module name to a path under `html_root`: the first segment
/// (namespace) and last segment (leaf) are dropped from the directory part,
/// and the leaf, lowercased, names the `.html` file. `og.common.details.foo`
/// under `/app` becomes `/app/common/details/foo.html`.
fn module_path(html_root: &str, name: &str) -> String {
    let segments: Vec<&str> = name.split('.').collect();
    let leaf = segments.last().copied().unwrap_or_default();
    // 1..len-1 is empty or out of range for names without namespace/leaf structure
    let middle = segments
        .get(1..segments.len().saturating_sub(1))
        .unwrap_or(&[]);

    let mut parts: Vec<String> = middle.iter().map(|s| s.to_string()).collect();
    parts.push(format!("{}.html", leaf.to_lowercase()));
    format!("{}/{}", html_root.trim_end_matches('/'), parts.join("/"))
}
