//! Commands understood by the interactive shell.
//!
//! Every input line is parsed into a [`Command`] before anything runs, so
//! typos in field names or stages are reported without touching a form.

pub mod oneshot;

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use novamatch_core::matchmaking::MatchFilters;
use novamatch_core::navigation::View;
use novamatch_core::profile::{InvestorDraft, Stage, StartupDraft};
use strum::IntoEnumIterator;

/// Slash commands offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "/home",
    "/matchmaking",
    "/chat",
    "/profile",
    "/resources",
    "/startup",
    "/investor",
    "/filter",
    "/search",
    "/signin",
    "/signout",
    "/reload",
    "/help",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(View),
    EditStartup(StartupEdit),
    SubmitStartup,
    EditInvestor(InvestorEdit),
    SubmitInvestor,
    EditFilter(FilterEdit),
    Search,
    SignIn,
    SignOut,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StartupEdit {
    Name(String),
    Tagline(String),
    Industry(String),
    Stage(Stage),
    FundingMin(String),
    FundingMax(String),
}

impl StartupEdit {
    const FIELDS: &'static [&'static str] =
        &["name", "tagline", "industry", "stage", "funding-min", "funding-max"];

    fn parse(field: &str, value: String) -> Result<Self> {
        Ok(match field {
            "name" => Self::Name(value),
            "tagline" => Self::Tagline(value),
            "industry" => Self::Industry(value),
            "stage" => Self::Stage(parse_stage(&value)?),
            "funding-min" => Self::FundingMin(value),
            "funding-max" => Self::FundingMax(value),
            other => bail!(unknown_field(other, Self::FIELDS)),
        })
    }

    pub fn apply(self, draft: &mut StartupDraft) {
        match self {
            Self::Name(v) => draft.name = v,
            Self::Tagline(v) => draft.tagline = v,
            Self::Industry(v) => draft.industry = v,
            Self::Stage(stage) => draft.stage = stage,
            Self::FundingMin(v) => draft.funding_needs_min = v,
            Self::FundingMax(v) => draft.funding_needs_max = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvestorEdit {
    Name(String),
    Email(String),
    Domains(String),
    Stage(Stage),
    TicketMin(String),
    TicketMax(String),
}

impl InvestorEdit {
    const FIELDS: &'static [&'static str] =
        &["name", "email", "domains", "stage", "ticket-min", "ticket-max"];

    fn parse(field: &str, value: String) -> Result<Self> {
        Ok(match field {
            "name" => Self::Name(value),
            "email" => Self::Email(value),
            "domains" => Self::Domains(value),
            "stage" => Self::Stage(parse_stage(&value)?),
            "ticket-min" => Self::TicketMin(value),
            "ticket-max" => Self::TicketMax(value),
            other => bail!(unknown_field(other, Self::FIELDS)),
        })
    }

    pub fn apply(self, draft: &mut InvestorDraft) {
        match self {
            Self::Name(v) => draft.name = v,
            Self::Email(v) => draft.email = v,
            Self::Domains(v) => draft.domains = v,
            Self::Stage(stage) => draft.preferred_stage = stage,
            Self::TicketMin(v) => draft.ticket_min = v,
            Self::TicketMax(v) => draft.ticket_max = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    Industry(String),
    /// `None` is the "Any stage" choice.
    Stage(Option<Stage>),
    Geography(String),
    TicketMin(String),
    TicketMax(String),
}

impl FilterEdit {
    const FIELDS: &'static [&'static str] = &["industry", "stage", "geography", "ticket-min", "ticket-max"];

    fn parse(field: &str, value: String) -> Result<Self> {
        Ok(match field {
            "industry" => Self::Industry(value),
            "stage" if value.trim().is_empty() || value.trim() == "any" => Self::Stage(None),
            "stage" => Self::Stage(Some(parse_stage(&value)?)),
            "geography" => Self::Geography(value),
            "ticket-min" => Self::TicketMin(value),
            "ticket-max" => Self::TicketMax(value),
            other => bail!(unknown_field(other, Self::FIELDS)),
        })
    }

    pub fn apply(self, filters: &mut MatchFilters) {
        match self {
            Self::Industry(v) => filters.industry = v,
            Self::Stage(stage) => filters.stage = stage,
            Self::Geography(v) => filters.geography = v,
            Self::TicketMin(v) => filters.ticket_min = v,
            Self::TicketMax(v) => filters.ticket_max = v,
        }
    }
}

fn parse_stage(value: &str) -> Result<Stage> {
    Stage::from_str(value.trim()).map_err(|_| {
        let stages: Vec<String> = Stage::iter().map(|s| s.to_string()).collect();
        anyhow!("Unknown stage '{}'. Expected one of: {}", value.trim(), stages.join(", "))
    })
}

fn unknown_field(field: &str, expected: &[&str]) -> String {
    format!("Unknown field '{}'. Expected one of: {}", field, expected.join(", "))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if line == "quit" || line == "exit" {
            return Ok(Command::Quit);
        }

        let Some(rest) = line.strip_prefix('/') else {
            bail!("Commands start with '/'. Type /help for a list.");
        };
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        if let Ok(view) = View::from_str(name) {
            return Ok(Command::Navigate(view));
        }

        match name {
            "startup" => match split_field(args)? {
                ("submit", _) => Ok(Command::SubmitStartup),
                (field, value) => Ok(Command::EditStartup(StartupEdit::parse(field, value)?)),
            },
            "investor" => match split_field(args)? {
                ("submit", _) => Ok(Command::SubmitInvestor),
                (field, value) => Ok(Command::EditInvestor(InvestorEdit::parse(field, value)?)),
            },
            "filter" => {
                let (field, value) = split_field(args)?;
                Ok(Command::EditFilter(FilterEdit::parse(field, value)?))
            }
            "search" => Ok(Command::Search),
            "signin" => Ok(Command::SignIn),
            "signout" => Ok(Command::SignOut),
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            other => bail!("Unknown command '/{}'. Type /help for a list.", other),
        }
    }
}

/// Splits `field rest of value` into the field and the (possibly empty) value.
fn split_field(args: &str) -> Result<(&str, String)> {
    if args.is_empty() {
        bail!("Missing field name");
    }
    Ok(match args.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim().to_string()),
        None => (args, String::new()),
    })
}

pub fn help_text() -> String {
    [
        "/home /matchmaking /chat /profile /resources   switch views",
        "/startup <field> <value>     edit the startup form (name, tagline, industry, stage, funding-min, funding-max)",
        "/startup submit              create the startup",
        "/investor <field> <value>    edit the investor form (name, email, domains, stage, ticket-min, ticket-max)",
        "/investor submit             create the investor",
        "/filter <field> <value>      edit match filters (industry, stage, geography, ticket-min, ticket-max)",
        "/search                      run the match search",
        "/signin /signout             Google sign-in",
        "/reload                      reload latest startups and investors",
        "quit                         exit",
    ]
    .join("\n")
}
