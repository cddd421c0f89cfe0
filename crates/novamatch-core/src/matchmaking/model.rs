use serde::{Deserialize, Serialize};

use crate::profile::Stage;
use crate::wire::opaque_id;

/// Body of `POST /api/matchmaking`.
///
/// Every field is sent explicitly; absent filters go out as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchQuery {
    pub industry: Option<Vec<String>>,
    pub stage: Option<Stage>,
    pub geography: Option<String>,
    pub ticket_min: Option<f64>,
    pub ticket_max: Option<f64>,
}

/// One pairing returned by the backend, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Startup identity
    #[serde(deserialize_with = "opaque_id")]
    pub a_id: String,
    /// Investor identity
    #[serde(deserialize_with = "opaque_id")]
    pub b_id: String,
    pub score: f64,
}
