//! Fixed copy shown by the views.

pub const HERO_TITLE: &str = "Connect Founders, Investors, and Mentors";
pub const HERO_TAGLINE: &str =
    "A transparent, data-driven platform to reduce friction in early-stage funding.";

pub const CREATE_STARTUP_HEADING: &str = "Create a Startup Profile";
pub const CREATE_STARTUP_SUBTITLE: &str =
    "Share your problem, solution, traction, and funding needs.";
pub const CREATE_INVESTOR_HEADING: &str = "Create an Investor Profile";
pub const CREATE_INVESTOR_SUBTITLE: &str = "Add your thesis, preferred stages, and ticket size.";
pub const LATEST_STARTUPS_HEADING: &str = "Latest Startups";
pub const LATEST_INVESTORS_HEADING: &str = "Latest Investors";

pub const MATCHMAKING_HEADING: &str = "Find Matches";
pub const RESULTS_HEADING: &str = "Results";

pub const CHAT_HEADING: &str = "Chat (Preview)";
pub const CHAT_PREVIEW: &str =
    "Create profiles first, then implement conversations with IDs in a later iteration.";

pub const PROFILE_HEADING: &str = "Profile";
pub const SIGNED_OUT_PROMPT: &str = "Sign in to personalize your experience.";

pub const RESOURCES_HEADING: &str = "Resources";

pub const RESOURCES: &[&str] = &[
    "How to craft a compelling pitch",
    "Understanding fundraising stages",
    "Diligence checklist for investors",
];
