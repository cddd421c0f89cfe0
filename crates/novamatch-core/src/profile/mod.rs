//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: wire records for startups and investors, plus [`Stage`]
//! - `draft`: editable form drafts and their normalization

mod draft;
mod model;

pub use draft::{InvestorDraft, StartupDraft};
pub use model::{CreatedRecord, InvestorProfile, NewInvestor, NewStartup, Stage, StartupProfile};
