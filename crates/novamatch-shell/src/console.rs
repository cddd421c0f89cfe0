//! Terminal implementations of the identity provider and notifier.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use novamatch_core::auth::IdentityProvider;
use novamatch_core::error::{NovaError, Result};
use novamatch_core::Notifier;

const SIGN_IN_HELP_URL: &str = "https://developers.google.com/oauthplayground";

/// Google sign-in for a terminal: the user pastes an ID token obtained in a
/// browser for the configured client.
#[derive(Default)]
pub struct ConsoleIdentityProvider {
    loaded: AtomicBool,
    client_id: Mutex<Option<String>>,
}

impl ConsoleIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for ConsoleIdentityProvider {
    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    async fn load(&self) -> Result<()> {
        tracing::debug!("Loading console identity provider");
        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn initialize(&self, client_id: &str) -> Result<()> {
        let mut current = self
            .client_id
            .lock()
            .map_err(|e| NovaError::auth(format!("provider state poisoned: {}", e)))?;
        *current = Some(client_id.to_string());
        Ok(())
    }

    fn render_button(&self) -> Result<()> {
        let client_id = self
            .client_id
            .lock()
            .map_err(|e| NovaError::auth(format!("provider state poisoned: {}", e)))?
            .clone()
            .ok_or_else(|| NovaError::auth("identity provider used before initialize"))?;

        println!("{}", "Sign in with Google".bright_blue().bold());
        println!(
            "{}",
            format!(
                "Obtain an ID token for client {} (e.g. via {}) and paste it below.",
                client_id, SIGN_IN_HELP_URL
            )
            .bright_black()
        );
        println!("{}", "Leave empty to cancel.".bright_black());
        Ok(())
    }

    async fn next_credential(&self) -> Result<Option<String>> {
        let line = tokio::task::spawn_blocking(|| -> io::Result<String> {
            print!("id_token> ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await
        .map_err(|e| NovaError::io(format!("credential prompt failed: {}", e)))??;

        let token = line.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }
}

/// Prints alerts in red and waits for Enter.
pub struct ConsoleNotifier;

/// Shows `message` on `out` and reads one line of acknowledgement.
fn acknowledge(message: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", format!("⚠ {}", message).red().bold())?;
    write!(out, "{}", "Press Enter to continue...".bright_black())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn alert(&self, message: &str) {
        let message = message.to_string();
        let waited = tokio::task::spawn_blocking(move || {
            acknowledge(&message, &mut io::stdin().lock(), &mut io::stdout())
        })
        .await;
        match waited {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Could not wait for alert acknowledgement"),
            Err(e) => tracing::warn!(error = %e, "Alert prompt task failed"),
        }
    }
}
