use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use novamatch_application::lists::LoadOutcome;
use novamatch_core::navigation::{NavigationShell, View};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use crate::app::{App, ReloadLists};
use crate::commands::{self, Command, COMMANDS};
use crate::screens;

/// Completes and hints slash commands; highlights a command line.
struct CommandHelper;

impl CommandHelper {
    /// Commands extending the typed prefix. Only a bare `/word` is completed.
    fn matches(line: &str) -> impl Iterator<Item = &'static str> + '_ {
        let completable = line.starts_with('/') && !line.contains(' ');
        COMMANDS
            .iter()
            .copied()
            .filter(move |cmd| completable && cmd.starts_with(line))
    }

    /// Remaining text of the first command longer than the prefix.
    fn suffix(line: &str) -> Option<&'static str> {
        Self::matches(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| &cmd[line.len()..])
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = Self::matches(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        Self::suffix(&line[..pos]).map(str::to_string)
    }
}

impl Validator for CommandHelper {}

fn report_load(outcome: LoadOutcome) {
    if outcome.startups_updated && outcome.investors_updated {
        println!("{}", "Latest startups and investors loaded.".bright_black());
        return;
    }
    if !outcome.startups_updated {
        println!("{}", "Could not load startups (see log).".yellow());
    }
    if !outcome.investors_updated {
        println!("{}", "Could not load investors (see log).".yellow());
    }
}

fn show(text: String) {
    println!("{}", text);
}

/// Runs the interactive shell until `quit` or end of input.
pub async fn run(app: App, mut reload_rx: mpsc::Receiver<ReloadLists>) -> Result<()> {
    let app = Arc::new(app);

    // Reloads run in the background; each completion reports itself
    let lists = app.lists.clone();
    let reloader = tokio::spawn(async move {
        while reload_rx.recv().await.is_some() {
            report_load(lists.load().await);
        }
    });
    app.request_reload().await;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CommandHelper));
    let mut shell = NavigationShell::new();

    println!("{}", "=== NovaMatch ===".bright_magenta().bold());
    println!("{}", "Type /help for commands, or 'quit' to exit.".bright_black());
    println!("{}", screens::menu(shell.current()));
    show(app.render(shell.current()).await);

    loop {
        let prompt = format!("{}> ", shell.current());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let command = match trimmed.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };
                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                execute(&app, &mut shell, command).await;
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    reloader.abort();
    Ok(())
}

async fn execute(app: &Arc<App>, shell: &mut NavigationShell, command: Command) {
    match command {
        Command::Navigate(view) => {
            shell.navigate(view);
            println!("{}", screens::menu(view));
            show(app.render(view).await);
        }
        Command::EditStartup(edit) => {
            app.startup_form.update(|draft| edit.apply(draft)).await;
            show(app.render(View::Home).await);
        }
        Command::EditInvestor(edit) => {
            app.investor_form.update(|draft| edit.apply(draft)).await;
            show(app.render(View::Home).await);
        }
        Command::SubmitStartup => {
            let form = app.startup_form.clone();
            tokio::spawn(async move {
                match form.submit().await {
                    Ok(id) => println!("{}", format!("Startup created ({}).", id).green()),
                    Err(e) if e.is_validation() => println!("{}", e.to_string().yellow()),
                    // Logged by the form; the draft is already reset
                    Err(_) => {}
                }
            });
        }
        Command::SubmitInvestor => {
            let form = app.investor_form.clone();
            tokio::spawn(async move {
                match form.submit().await {
                    Ok(id) => println!("{}", format!("Investor created ({}).", id).green()),
                    Err(e) if e.is_validation() => println!("{}", e.to_string().yellow()),
                    Err(_) => {}
                }
            });
        }
        Command::EditFilter(edit) => {
            app.matchmaking.update_filters(|filters| edit.apply(filters)).await;
            show(app.render(View::Matchmaking).await);
        }
        Command::Search => match app.matchmaking.search().await {
            Ok(count) => {
                println!("{}", format!("{} match(es) found.", count).bright_black());
                show(app.render(View::Matchmaking).await);
            }
            Err(e) => println!("{}", format!("Search failed: {}", e).red()),
        },
        Command::SignIn => {
            if let Some(profile) = app.session.profile().await {
                println!("Already signed in as {}.", profile.display_name().green());
                return;
            }
            match app.widget.sign_in().await {
                Ok(Some(profile)) => {
                    println!("{}", format!("Welcome, {}!", profile.display_name()).green());
                    show(app.render(shell.current()).await);
                }
                Ok(None) => {}
                Err(e) => println!("{}", format!("Sign-in unavailable: {}", e).red()),
            }
        }
        Command::SignOut => {
            if let Err(e) = app.session.sign_out().await {
                tracing::error!(error = %e, "Failed to clear stored profile");
                println!("{}", format!("Signed out, but the stored profile could not be removed: {}", e).red());
            } else {
                println!("{}", "Signed out.".green());
            }
            show(app.render(shell.current()).await);
        }
        Command::Reload => app.request_reload().await,
        Command::Help => println!("{}", commands::help_text()),
        Command::Quit => {}
    }
}
