//! A browser for the repository listing of a GitHub account: one
//! authenticated fetch per session, then client-side filtering by name
//! and pagination with a fixed page size.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
