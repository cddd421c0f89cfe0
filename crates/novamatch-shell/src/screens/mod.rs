//! Text rendering of the top-level views.
//!
//! Renderers are pure: callers gather a snapshot of the application state and
//! get back the full text of the view.

pub mod content;

use std::fmt::Write;

use colored::Colorize;
use novamatch_application::identity_widget::CONFIGURE_LABEL;
use novamatch_application::lists::Listing;
use novamatch_core::auth::SignedInProfile;
use novamatch_core::matchmaking::MatchFilters;
use novamatch_core::navigation::View;
use novamatch_core::profile::{InvestorDraft, StartupDraft};
use strum::IntoEnumIterator;

use content::*;

/// State the home view shows.
pub struct HomeSnapshot {
    pub profile: Option<SignedInProfile>,
    pub sign_in_enabled: bool,
    pub startup_draft: StartupDraft,
    pub startup_pending: bool,
    pub investor_draft: InvestorDraft,
    pub investor_pending: bool,
    pub startups: Listing,
    pub investors: Listing,
}

/// Menu line with the active view highlighted.
pub fn menu(current: View) -> String {
    View::iter()
        .map(|view| {
            if view == current {
                format!("[{}]", view.label()).bright_magenta().bold().to_string()
            } else {
                view.label().bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn heading(out: &mut String, text: &str) {
    let _ = writeln!(out, "\n{}", text.bright_cyan().bold());
}

fn subtitle(out: &mut String, text: &str) {
    let _ = writeln!(out, "{}", text.bright_black());
}

fn field(out: &mut String, name: &str, value: &str) {
    let shown = if value.is_empty() { "-" } else { value };
    let _ = writeln!(out, "  {:<12} {}", format!("{}:", name).bright_black(), shown);
}

fn listing(out: &mut String, listing: &Listing) {
    match listing {
        Listing::Empty(placeholder) => {
            let _ = writeln!(out, "  {}", placeholder.bright_black());
        }
        Listing::Rows(rows) => {
            for row in rows {
                let _ = writeln!(out, "  {}", row.title.bold());
                let _ = writeln!(out, "    {}", row.detail);
            }
        }
    }
}

/// Header of the startup section: the sign-in hint, or who is signed in.
fn identity_header(out: &mut String, profile: Option<&SignedInProfile>, sign_in_enabled: bool) {
    match profile {
        Some(profile) => {
            let _ = writeln!(
                out,
                "  {} {} <{}>",
                "Signed in as".bright_black(),
                profile.display_name().green(),
                profile.email
            );
        }
        None if sign_in_enabled => {
            let _ = writeln!(out, "  {}", "Sign in with Google: /signin".yellow());
        }
        None => {
            let _ = writeln!(out, "  {}", format!("{} (disabled)", CONFIGURE_LABEL).bright_black());
        }
    }
}

fn pending_marker(pending: bool) -> &'static str {
    if pending { " (saving...)" } else { "" }
}

pub fn home(snapshot: &HomeSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HERO_TITLE.bright_magenta().bold());
    let _ = writeln!(out, "{}", HERO_TAGLINE);

    heading(
        &mut out,
        &format!("{}{}", CREATE_STARTUP_HEADING, pending_marker(snapshot.startup_pending)),
    );
    subtitle(&mut out, CREATE_STARTUP_SUBTITLE);
    identity_header(&mut out, snapshot.profile.as_ref(), snapshot.sign_in_enabled);
    let draft = &snapshot.startup_draft;
    field(&mut out, "name", &draft.name);
    field(&mut out, "tagline", &draft.tagline);
    field(&mut out, "industry", &draft.industry);
    field(&mut out, "stage", &draft.stage.to_string());
    field(&mut out, "funding-min", &draft.funding_needs_min);
    field(&mut out, "funding-max", &draft.funding_needs_max);

    heading(
        &mut out,
        &format!("{}{}", CREATE_INVESTOR_HEADING, pending_marker(snapshot.investor_pending)),
    );
    subtitle(&mut out, CREATE_INVESTOR_SUBTITLE);
    let draft = &snapshot.investor_draft;
    field(&mut out, "name", &draft.name);
    field(&mut out, "email", &draft.email);
    field(&mut out, "domains", &draft.domains);
    field(&mut out, "stage", &draft.preferred_stage.to_string());
    field(&mut out, "ticket-min", &draft.ticket_min);
    field(&mut out, "ticket-max", &draft.ticket_max);

    heading(&mut out, LATEST_STARTUPS_HEADING);
    listing(&mut out, &snapshot.startups);
    heading(&mut out, LATEST_INVESTORS_HEADING);
    listing(&mut out, &snapshot.investors);
    out
}

pub fn matchmaking(filters: &MatchFilters, results: &Listing) -> String {
    let mut out = String::new();
    heading(&mut out, MATCHMAKING_HEADING);
    field(&mut out, "industry", &filters.industry);
    let stage = filters.stage.map(|s| s.to_string()).unwrap_or_else(|| "Any stage".to_string());
    field(&mut out, "stage", &stage);
    field(&mut out, "geography", &filters.geography);
    field(&mut out, "ticket-min", &filters.ticket_min);
    field(&mut out, "ticket-max", &filters.ticket_max);

    heading(&mut out, RESULTS_HEADING);
    listing(&mut out, results);
    out
}

pub fn chat() -> String {
    let mut out = String::new();
    heading(&mut out, CHAT_HEADING);
    let _ = writeln!(out, "  {}", CHAT_PREVIEW);
    out
}

pub fn profile(profile: Option<&SignedInProfile>, sign_in_enabled: bool) -> String {
    let mut out = String::new();
    heading(&mut out, PROFILE_HEADING);
    match profile {
        Some(profile) => {
            field(&mut out, "name", &profile.name);
            field(&mut out, "email", &profile.email);
            field(&mut out, "picture", &profile.picture);
            let _ = writeln!(out, "  {}", "Sign out: /signout".bright_black());
        }
        None => {
            let _ = writeln!(out, "  {}", SIGNED_OUT_PROMPT);
            identity_header(&mut out, None, sign_in_enabled);
        }
    }
    out
}

pub fn resources() -> String {
    let mut out = String::new();
    heading(&mut out, RESOURCES_HEADING);
    for item in RESOURCES {
        let _ = writeln!(out, "  {} {}", "•".bright_magenta(), item);
    }
    out
}
