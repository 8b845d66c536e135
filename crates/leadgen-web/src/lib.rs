//! leadgen-web: Read-only viewer over the ranked-leads table.
//! Provides:
//!   - HTML page with location filter and free-text search
//!   - JSON listing of the filtered rows
//!   - CSV export of the filtered rows

pub mod filter;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
