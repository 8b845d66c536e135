//! leadgen-ingestion: Fetch stage of the lead pipeline.
//! - Literature index access (PubMed E-utilities)
//! - Paper extraction from raw article records
//! - Recency filtering
//! - Title de-duplication
//! - Papers table output

pub mod dedup;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod sources;
