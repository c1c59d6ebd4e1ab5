//! Host side of the selector: receives selections and persists them

use std::path::PathBuf;
use tracing::{info, warn};

use super::Settings;
use crate::catalog::ModelDescriptor;
use crate::selector::SelectionHandler;

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational message
    Status(String),
    /// Something went wrong
    Error(String),
}

/// State the selector reports into: the saved defaults and the drawer flag
#[derive(Debug, Clone, Default)]
pub struct Host {
    /// Persisted default model/provider
    pub settings: Settings,

    /// Where to persist settings; nothing is written when `None`
    pub settings_path: Option<PathBuf>,

    /// Whether the drawer is shown
    pub drawer_open: bool,

    /// Last status message
    pub notice: Option<Notice>,
}

impl Host {
    /// Create a host around loaded settings
    #[must_use]
    pub const fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self {
            settings,
            settings_path,
            drawer_open: false,
            notice: None,
        }
    }
}

impl SelectionHandler for Host {
    fn on_selection(&mut self, model: &ModelDescriptor) {
        self.settings.set_default(model);
        info!(model = %model.identity(), "Default model changed");

        let Some(path) = &self.settings_path else {
            self.notice = Some(Notice::Status(format!("Model set to {}", model.label())));
            return;
        };

        match self.settings.save_to(path) {
            Ok(()) => {
                self.notice = Some(Notice::Status(format!("Model set to {}", model.label())));
            }
            Err(e) => {
                warn!("Failed to save settings: {}", e);
                self.notice = Some(Notice::Error(format!("Failed to save settings: {e}")));
            }
        }
    }

    fn on_close(&mut self) {
        self.drawer_open = false;
    }
}
