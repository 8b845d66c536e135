//! leadgen-ranker: Lead scoring and ranking.
//! Scores every lead against a fixed additive rubric (capped at 100) and
//! ranks the result.

pub mod keywords;
pub mod pipeline;
pub mod rank;
pub mod scorer;
pub mod weights;
