use log::{debug, error};

use crate::RepositoryFetcher;

use super::{LoadStatus, PageState, Repository, filter_by_name};

/// The single user-visible message shown for any fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching repositories";

/// The state of one browsing session: the fetched record list, the
/// live search term, the pagination state, and the load status.
///
/// All mutation happens through `&mut self` event handlers; the
/// filtered set and the current page slice are recomputed on every
/// read, so they can never go stale.
#[derive(Debug)]
pub struct BrowserSession {
    /// The repositories fetched at activation, in endpoint order.
    repositories: Vec<Repository>,

    /// The current search term.
    search_term: String,

    /// The pagination state over the filtered set.
    page: PageState,

    /// The load status of the one fetch performed per activation.
    status: LoadStatus,
}

impl BrowserSession {
    /// Creates a new `BrowserSession` in the `Loading` state, with an
    /// empty search term and the first page selected.
    pub fn new(page_size: usize) -> Self {
        Self {
            repositories: Vec::new(),
            search_term: String::new(),
            page: PageState::new(page_size),
            status: LoadStatus::Loading,
        }
    }

    /// Performs the single fetch of this session.
    ///
    /// Transitions the load status exactly once, to `Ready` on success
    /// or `Error` on failure. Both outcomes are terminal: a second
    /// call is a no-op and does not fetch again. Any fetch error
    /// collapses to [FETCH_ERROR_MESSAGE]; the cause is logged and
    /// goes no further.
    pub async fn activate(&mut self, fetcher: &dyn RepositoryFetcher) {
        if self.status != LoadStatus::Loading {
            debug!("Session already activated, status is {}", self.status);
            return;
        }

        match fetcher.fetch().await {
            Ok(repositories) => {
                debug!("Fetched {} repositories", repositories.len());
                self.repositories = repositories;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                error!("{FETCH_ERROR_MESSAGE}: {e:?}");
                self.status = LoadStatus::Error;
            }
        }
    }

    /// Retrieves the load status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Retrieves the user-visible error message, if the fetch failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.status {
            LoadStatus::Error => Some(FETCH_ERROR_MESSAGE),
            _ => None,
        }
    }

    /// Retrieves the current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Sets the search term and clamps the current page to the last
    /// valid page of the new filtered set.
    pub fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.to_string();
        let filtered_count = self.filtered_repositories().len();
        self.page.clamp(filtered_count);
    }

    /// Retrieves the subset of repositories whose name matches the
    /// current search term, in original order.
    pub fn filtered_repositories(&self) -> Vec<&Repository> {
        filter_by_name(&self.repositories, &self.search_term)
    }

    /// Retrieves the repositories belonging to the current page.
    pub fn current_page_items(&self) -> Vec<&Repository> {
        self.page.page_slice(&self.filtered_repositories()).to_vec()
    }

    /// Retrieves the 1-based index of the displayed page.
    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// Retrieves the total number of pages of the filtered set.
    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered_repositories().len())
    }

    /// Whether a next page exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Whether a previous page exists.
    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }

    /// Advances to the next page; a no-op on the last page.
    pub fn next_page(&mut self) {
        let filtered_count = self.filtered_repositories().len();
        self.page.next(filtered_count);
    }

    /// Moves back to the previous page; a no-op on the first page.
    pub fn previous_page(&mut self) {
        self.page.previous();
    }
}
