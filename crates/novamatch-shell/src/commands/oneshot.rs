//! Non-interactive subcommands.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use novamatch_application::lists::{ListRow, Listing, NO_INVESTORS, NO_STARTUPS};
use novamatch_application::{IdentitySession, MatchmakingView};
use novamatch_core::matchmaking::MatchFilters;
use novamatch_core::RemoteGateway;

fn print_rows(rows: Vec<ListRow>, placeholder: &str) {
    if rows.is_empty() {
        println!("{}", placeholder.bright_black());
    }
    for row in rows {
        println!("{}", row.title.bold());
        println!("  {}", row.detail);
    }
}

pub async fn startups(gateway: &dyn RemoteGateway) -> Result<()> {
    let startups = gateway.list_startups().await?;
    print_rows(startups.iter().map(ListRow::from).collect(), NO_STARTUPS);
    Ok(())
}

pub async fn investors(gateway: &dyn RemoteGateway) -> Result<()> {
    let investors = gateway.list_investors().await?;
    print_rows(investors.iter().map(ListRow::from).collect(), NO_INVESTORS);
    Ok(())
}

pub async fn run_match(gateway: Arc<dyn RemoteGateway>, filters: MatchFilters) -> Result<()> {
    let view = MatchmakingView::new(gateway);
    view.update_filters(|current| *current = filters).await;
    view.search().await?;

    match view.listing().await {
        Listing::Empty(placeholder) => print_rows(Vec::new(), placeholder),
        Listing::Rows(rows) => print_rows(rows, ""),
    }
    Ok(())
}

pub async fn whoami(session: &IdentitySession) -> Result<()> {
    match session.profile().await {
        Some(profile) => {
            println!("{}", profile.display_name().green().bold());
            if !profile.email.is_empty() {
                println!("  {}", profile.email);
            }
            if !profile.picture.is_empty() {
                println!("  {}", profile.picture.bright_black());
            }
        }
        None => println!("{}", "Not signed in.".bright_black()),
    }
    Ok(())
}

pub async fn sign_out(session: &IdentitySession) -> Result<()> {
    session.sign_out().await?;
    println!("{}", "Signed out.".green());
    Ok(())
}
