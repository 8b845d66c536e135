//! Shared application state for the viewer.

use std::path::Path;
use std::sync::Arc;

use minijinja::Environment;
use tracing::info;

use leadgen_common::table::read_table;
use leadgen_common::{Result, ScoredLead};

use crate::render::build_templates;

/// Shared state injected into every Axum handler. The ranked table is
/// loaded once and never written back.
pub struct AppState {
    pub leads: Vec<ScoredLead>,
    pub templates: Environment<'static>,
}

impl AppState {
    /// Load the ranked-leads table at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let leads: Vec<ScoredLead> = read_table(path)?;
        info!(rows = leads.len(), path = %path.display(), "Loaded ranked leads");
        Self::from_leads(leads)
    }

    pub fn from_leads(leads: Vec<ScoredLead>) -> Result<Self> {
        Ok(Self {
            leads,
            templates: build_templates()?,
        })
    }
}

pub type SharedState = Arc<AppState>;
