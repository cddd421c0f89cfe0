//! Startup and investor profile records as exchanged with the remote API.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::wire::{null_as_default, opaque_id, optional_opaque_id};

/// Funding stage of a startup, or the stage an investor prefers.
///
/// Variant order is the order stages are offered to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Stage {
    #[serde(rename = "idea")]
    #[strum(serialize = "idea")]
    Idea,
    #[serde(rename = "MVP")]
    #[strum(serialize = "MVP")]
    Mvp,
    #[serde(rename = "pre-seed")]
    #[strum(serialize = "pre-seed")]
    PreSeed,
    #[serde(rename = "seed")]
    #[strum(serialize = "seed")]
    Seed,
    #[serde(rename = "series-a")]
    #[strum(serialize = "series-a")]
    SeriesA,
    #[serde(rename = "series-b")]
    #[strum(serialize = "series-b")]
    SeriesB,
}

/// A startup as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStartupProfile")]
pub struct StartupProfile {
    /// Backend-assigned identity
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub tagline: String,
    pub industry: Vec<String>,
    pub stage: Option<Stage>,
    pub funding_needs_min: Option<f64>,
    pub funding_needs_max: Option<f64>,
}

/// An investor as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInvestorProfile")]
pub struct InvestorProfile {
    /// Backend-assigned identity
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub domains: Vec<String>,
    pub preferred_stage: Vec<Stage>,
    pub ticket_min: Option<f64>,
    pub ticket_max: Option<f64>,
}

// Listing records carry `_id`, `id`, or both. `_id` wins.
#[derive(Deserialize)]
struct RawStartupProfile {
    #[serde(rename = "_id", default, deserialize_with = "optional_opaque_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "optional_opaque_id")]
    id: Option<String>,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    industry: Vec<String>,
    #[serde(default)]
    stage: Option<Stage>,
    #[serde(default)]
    funding_needs_min: Option<f64>,
    #[serde(default)]
    funding_needs_max: Option<f64>,
}

impl From<RawStartupProfile> for StartupProfile {
    fn from(raw: RawStartupProfile) -> Self {
        Self {
            id: raw.mongo_id.or(raw.id),
            name: raw.name,
            tagline: raw.tagline,
            industry: raw.industry,
            stage: raw.stage,
            funding_needs_min: raw.funding_needs_min,
            funding_needs_max: raw.funding_needs_max,
        }
    }
}

#[derive(Deserialize)]
struct RawInvestorProfile {
    #[serde(rename = "_id", default, deserialize_with = "optional_opaque_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "optional_opaque_id")]
    id: Option<String>,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    domains: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    preferred_stage: Vec<Stage>,
    #[serde(default)]
    ticket_min: Option<f64>,
    #[serde(default)]
    ticket_max: Option<f64>,
}

impl From<RawInvestorProfile> for InvestorProfile {
    fn from(raw: RawInvestorProfile) -> Self {
        Self {
            id: raw.mongo_id.or(raw.id),
            name: raw.name,
            email: raw.email,
            domains: raw.domains,
            preferred_stage: raw.preferred_stage,
            ticket_min: raw.ticket_min,
            ticket_max: raw.ticket_max,
        }
    }
}

/// Payload for `POST /api/startups`.
///
/// Blank numeric fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStartup {
    pub name: String,
    pub tagline: String,
    pub industry: Vec<String>,
    pub stage: Stage,
    pub funding_needs_min: Option<f64>,
    pub funding_needs_max: Option<f64>,
}

/// Payload for `POST /api/investors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub domains: Vec<String>,
    pub preferred_stage: Vec<Stage>,
    pub ticket_min: Option<f64>,
    pub ticket_max: Option<f64>,
}

/// Response body of both create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
}
