//! leadgen-enrich: Turns papers into per-author leads and attaches
//! placeholder contact and location data.

pub mod contact;
pub mod expand;
pub mod location;
pub mod pipeline;

pub use contact::generate_email;
pub use location::assign_location;
