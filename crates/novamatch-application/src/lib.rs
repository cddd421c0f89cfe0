//! Application layer for NovaMatch.
//!
//! Coordinates the domain types with a [`RemoteGateway`] and session storage
//! to implement the client's views: profile forms, latest-profile lists, the
//! matchmaking search, and sign-in.
//!
//! [`RemoteGateway`]: novamatch_core::RemoteGateway

pub mod forms;
pub mod identity_session;
pub mod identity_widget;
pub mod lists;
pub mod matchmaking_view;

#[cfg(test)]
mod test_support;

pub use forms::{FormController, InvestorForm, OnCreated, StartupForm};
pub use identity_session::IdentitySession;
pub use identity_widget::{IdentityWidget, WidgetState};
pub use lists::{ListRow, Listing, ProfileLists};
pub use matchmaking_view::{MatchState, MatchmakingView};
