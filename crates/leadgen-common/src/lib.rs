//! leadgen-common: Shared types, table I/O and configuration used by every
//! pipeline stage.

pub mod config;
pub mod error;
pub mod hubs;
pub mod models;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use error::{LeadgenError, Result};
pub use models::{Lead, Paper, ScoredLead};
