//! Editable drafts behind the startup and investor forms.
//!
//! A draft holds raw text exactly as typed. [`StartupDraft::normalize`] and
//! [`InvestorDraft::normalize`] are pure and never touch the network.

use serde::{Deserialize, Serialize};

use super::model::{NewInvestor, NewStartup, Stage};
use crate::error::{NovaError, Result};
use crate::normalize::{optional_number, split_tags};

/// In-progress startup form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupDraft {
    pub name: String,
    pub tagline: String,
    /// Comma-separated industries
    pub industry: String,
    pub stage: Stage,
    pub funding_needs_min: String,
    pub funding_needs_max: String,
}

impl Default for StartupDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            tagline: String::new(),
            industry: String::new(),
            stage: Stage::PreSeed,
            funding_needs_min: String::new(),
            funding_needs_max: String::new(),
        }
    }
}

impl StartupDraft {
    /// Rejects drafts the input layer would refuse to submit.
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "Startup name")
    }

    pub fn normalize(&self) -> NewStartup {
        NewStartup {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            industry: split_tags(&self.industry),
            stage: self.stage,
            funding_needs_min: optional_number(&self.funding_needs_min),
            funding_needs_max: optional_number(&self.funding_needs_max),
        }
    }
}

/// In-progress investor form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDraft {
    pub name: String,
    pub email: String,
    /// Comma-separated domains
    pub domains: String,
    pub preferred_stage: Stage,
    pub ticket_min: String,
    pub ticket_max: String,
}

impl Default for InvestorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            domains: String::new(),
            preferred_stage: Stage::Seed,
            ticket_min: String::new(),
            ticket_max: String::new(),
        }
    }
}

impl InvestorDraft {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "Investor/Fund name")
    }

    pub fn normalize(&self) -> NewInvestor {
        NewInvestor {
            name: self.name.clone(),
            email: self.email.clone(),
            domains: split_tags(&self.domains),
            preferred_stage: vec![self.preferred_stage],
            ticket_min: optional_number(&self.ticket_min),
            ticket_max: optional_number(&self.ticket_max),
        }
    }
}

fn require_name(name: &str, label: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NovaError::validation(format!("{} is required", label)));
    }
    Ok(())
}
