//! Matchmaking domain module.
//!
//! - `model`: the query sent to the backend and the results it returns
//! - `filters`: raw filter input and its normalization into a query

mod filters;
mod model;

pub use filters::MatchFilters;
pub use model::{MatchQuery, MatchResult};
