use anyhow::Context;
use log::debug;
use reqwest::{Client, header};
use thiserror::Error;

use crate::{FetcherConfig, Repository, RepositoryFetcher, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("repository-browser/", env!("CARGO_PKG_VERSION"));

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),
}

/// Fetches the repository listing from a REST API.
pub struct RestFetcher {
    client: Client,
    config: FetcherConfig,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance with the given configuration.
    pub fn try_new(config: FetcherConfig) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self { client, config })
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos",
            self.config.endpoint(),
            self.config.username()
        )
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self) -> StdResult<Vec<Repository>> {
        let url = self.listing_url();
        debug!("Fetching repository listing from {url}");
        let mut request = self.client.get(&url);
        if let Some(api_token) = self.config.api_token() {
            request = request.header(header::AUTHORIZATION, format!("token {api_token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::Remote(format!("Unexpected status code: {status}")).into());
        }

        let repositories = response
            .json::<Vec<Repository>>()
            .await
            .map_err(|e| FetcherError::Parse(e.to_string()))?;
        debug!("Fetched {} repositories", repositories.len());

        Ok(repositories)
    }
}
