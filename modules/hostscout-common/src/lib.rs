pub mod config;
pub mod error;
pub mod pattern;
pub mod types;

pub use config::Config;
pub use error::SourceError;
pub use pattern::domain_pattern;
pub use types::*;
