//! Navigation between the top-level views.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Keys of the top-level views, in menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Matchmaking,
    #[strum(to_string = "chat", serialize = "chat-preview")]
    Chat,
    Profile,
    Resources,
}

impl View {
    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Matchmaking => "Matchmaking",
            View::Chat => "Chat",
            View::Profile => "Profile",
            View::Resources => "Resources",
        }
    }
}

/// Tracks which view is active. Starts at [`View::Home`]; never persisted.
#[derive(Debug, Clone, Default)]
pub struct NavigationShell {
    current: View,
}

impl NavigationShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switches to `view`. Navigating to the active view is a no-op.
    pub fn navigate(&mut self, view: View) {
        self.current = view;
    }
}
