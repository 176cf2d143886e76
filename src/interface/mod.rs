mod fetcher;

pub use fetcher::*;
