use serde::{Deserialize, Serialize};

use super::model::MatchQuery;
use crate::normalize::{optional_number, optional_tags, optional_text};
use crate::profile::Stage;

/// Raw matchmaking filters as typed by the user.
///
/// `stage: None` means "any stage".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    /// Comma-separated industries
    pub industry: String,
    pub stage: Option<Stage>,
    pub geography: String,
    pub ticket_min: String,
    pub ticket_max: String,
}

impl MatchFilters {
    /// Builds a fresh query from the current filter text.
    pub fn to_query(&self) -> MatchQuery {
        MatchQuery {
            industry: optional_tags(&self.industry),
            stage: self.stage,
            geography: optional_text(&self.geography),
            ticket_min: optional_number(&self.ticket_min),
            ticket_max: optional_number(&self.ticket_max),
        }
    }
}
