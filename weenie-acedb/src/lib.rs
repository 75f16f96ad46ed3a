pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod sql;

pub use client::{AceDbClient, QueryTransport};
pub use config::{AceDbConfig, settings_path};
pub use error::AceDbError;
pub use lookup::{EnrichedWeenie, WeenieLookup};
