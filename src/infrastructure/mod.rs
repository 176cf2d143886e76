mod fetcher_rest;
mod view_terminal;

pub use fetcher_rest::*;
pub use view_terminal::*;
