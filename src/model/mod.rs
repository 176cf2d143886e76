mod config;
mod entities;
mod error;
mod filter;
mod pagination;
mod session;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use filter::*;
pub use pagination::*;
pub use session::*;
