/// Configuration for the repository fetcher, built once at startup and
/// passed in at construction.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// The account whose repositories are listed.
    username: String,

    /// The API token attached as an `Authorization` header, if any.
    ///
    /// A missing token is not an error; the request goes out
    /// unauthenticated and fails at the transport layer if the
    /// endpoint requires credentials.
    api_token: Option<String>,

    /// The base URL of the listing API.
    endpoint: String,
}

impl FetcherConfig {
    /// Creates a new `FetcherConfig` instance.
    pub fn new(username: &str, api_token: Option<String>, endpoint: &str) -> Self {
        Self {
            username: username.to_string(),
            api_token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Retrieves the account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Retrieves the API token, if configured.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Retrieves the base URL of the listing API.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_stripped() {
        let config = FetcherConfig::new("org-1", None, "https://api.github.com/");

        assert_eq!("https://api.github.com", config.endpoint());
    }

    #[test]
    fn missing_token_is_allowed() {
        let config = FetcherConfig::new("org-1", None, "https://api.github.com");

        assert_eq!(None, config.api_token());
    }
}
