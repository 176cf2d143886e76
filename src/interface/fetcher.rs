use crate::{Repository, StdResult};

/// A trait for fetching the repository listing from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the full repository listing in one request.
    async fn fetch(&self) -> StdResult<Vec<Repository>>;
}
