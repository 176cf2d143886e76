use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One repository entry returned by the listing endpoint.
///
/// Deserialized directly from the GitHub REST response; fields beyond
/// these four are ignored. Immutable once fetched.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Unique identifier of the repository.
    id: u64,

    /// The name of the repository.
    name: RepositoryName,

    /// The description of the repository, if any.
    description: Option<String>,

    /// The web URL of the repository.
    html_url: String,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(id: u64, name: &str, description: Option<&str>, html_url: &str) -> Self {
        Self {
            id,
            name: RepositoryName(name.to_string()),
            description: description.map(|description| description.to_string()),
            html_url: html_url.to_string(),
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the repository web URL.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Description: {}, Url: {}",
            self.name,
            self.description.as_deref().unwrap_or("-"),
            self.html_url
        )
    }
}

/// Progress of the one fetch performed per activation.
///
/// `Loading` is the initial state; `Ready` and `Error` are terminal
/// for the lifetime of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The fetch has been issued and has not resolved yet.
    Loading,

    /// The fetch resolved successfully and the record list is populated.
    Ready,

    /// The fetch failed; the record list is empty.
    Error,
}

impl Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStatus::Loading => write!(f, "loading"),
            LoadStatus::Ready => write!(f, "ready"),
            LoadStatus::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_accessors() {
        let repository = Repository::new(
            42,
            "repository-1",
            Some("A description"),
            "https://github.com/org-1/repository-1",
        );

        assert_eq!(42, repository.id());
        assert_eq!("repository-1", repository.name().as_str());
        assert_eq!(Some("A description"), repository.description());
        assert_eq!(
            "https://github.com/org-1/repository-1",
            repository.html_url()
        );
    }

    #[test]
    fn repository_deserializes_from_listing_entry_and_ignores_extra_fields() {
        let json = r#"{
            "id": 7,
            "name": "repository-1",
            "description": null,
            "html_url": "https://github.com/org-1/repository-1",
            "stargazers_count": 100,
            "fork": false
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();

        assert_eq!(
            Repository::new(
                7,
                "repository-1",
                None,
                "https://github.com/org-1/repository-1"
            ),
            repository
        );
    }

    #[test]
    fn repository_display_without_description() {
        let repository = Repository::new(
            1,
            "repository-1",
            None,
            "https://github.com/org-1/repository-1",
        );

        assert_eq!(
            "Repository: repository-1, Description: -, Url: https://github.com/org-1/repository-1",
            repository.to_string()
        );
    }
}
