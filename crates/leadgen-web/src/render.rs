//! HTML rendering for the leads page.

use minijinja::{context, Environment};

use leadgen_common::{LeadgenError, Result, ScoredLead};

use crate::filter::{location_options, LeadFilter};

const LEADS_TEMPLATE: &str = "leads.html";

pub fn build_templates() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(LEADS_TEMPLATE, include_str!("../templates/leads.html"))
        .map_err(template_error)?;
    Ok(env)
}

/// Render the leads page for an already-filtered row set.
pub fn render_leads_page(
    env: &Environment<'static>,
    all: &[ScoredLead],
    filter: &LeadFilter,
    rows: &[ScoredLead],
) -> Result<String> {
    let template = env.get_template(LEADS_TEMPLATE).map_err(template_error)?;
    template
        .render(context! {
            locations => location_options(all),
            selected_location => filter.selected_location(),
            search => filter.search_text(),
            total => all.len(),
            rows => rows,
        })
        .map_err(template_error)
}

fn template_error(e: minijinja::Error) -> LeadgenError {
    LeadgenError::Template(e.to_string())
}
