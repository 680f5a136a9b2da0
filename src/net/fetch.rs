use futures::future::BoxFuture;

use crate::errors::FetchError;
use crate::net::Response;

/// GET-style request primitive. The seam for the HTTP collaborator, so the
/// fetcher can be driven by a mock in tests.
pub trait HttpClient: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Response, FetchError>>;
}

/// Production client backed by `reqwest`.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    // Loads an URL and returns the buffered response
    async fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        // reqwest only accepts absolute URLs; reject anything else up front
        let url = url::Url::parse(url)?;

        let res = self.client.get(url).send().await?;

        let final_url = res.url().clone();
        let status = res.status().as_u16();
        let status_text = res
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let headers = res.headers().clone();

        if !res.status().is_success() {
            return Err(FetchError::HttpStatus {
                url: final_url.to_string(),
                status,
            });
        }

        // Fetch body. We don't do streaming
        let body = res.bytes().await?.to_vec();

        Ok(Response {
            url: final_url,
            status,
            status_text,
            headers,
            body,
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Response, FetchError>> {
        Box::pin(self.fetch(url))
    }
}
