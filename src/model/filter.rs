use super::Repository;

/// Filters repositories by case-insensitive substring match of the
/// search term against the repository name.
///
/// Only the name is searched, never the description. An empty search
/// term matches all repositories; no match yields an empty subset.
/// Original order is preserved.
pub fn filter_by_name<'a>(repositories: &'a [Repository], search_term: &str) -> Vec<&'a Repository> {
    let search_term = search_term.to_lowercase();

    repositories
        .iter()
        .filter(|repository| repository.name().to_lowercase().contains(&search_term))
        .collect()
}
