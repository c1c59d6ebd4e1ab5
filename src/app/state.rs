//! Application state: the catalog, the selector's search state and the host

use tracing::debug;

use super::{Config, Host};
use crate::catalog::ModelDescriptor;
use crate::selector::{ModelSelector, SearchState};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Models offered by the selector
    pub models: Vec<ModelDescriptor>,

    /// Query and cursor of the mounted selector
    pub search: SearchState,

    /// Selection callbacks target
    pub host: Host,

    /// Whether the application should exit
    pub should_quit: bool,
}

impl App {
    /// Create a new application
    #[must_use]
    pub const fn new(config: Config, models: Vec<ModelDescriptor>, host: Host) -> Self {
        Self {
            config,
            models,
            search: SearchState::new(),
            host,
            should_quit: false,
        }
    }

    /// Selector inputs for this frame
    #[must_use]
    pub fn selector(&self) -> ModelSelector<'_> {
        ModelSelector::new(&self.models, self.host.drawer_open)
            .title(self.config.title.as_deref())
            .defaults(
                self.host.settings.default_model(),
                self.host.settings.default_provider(),
            )
    }

    /// The model matching the saved default, if it is in the catalog
    #[must_use]
    pub fn current_model(&self) -> Option<&ModelDescriptor> {
        self.selector().active_model()
    }

    /// Show the drawer.
    ///
    /// The query survives closing and reopening; with an empty query the
    /// cursor jumps to the current model.
    pub fn open_drawer(&mut self) {
        if self.search.query.is_empty() {
            let selector = ModelSelector::new(&self.models, true).defaults(
                self.host.settings.default_model(),
                self.host.settings.default_provider(),
            );
            let visible = selector.visible_models("");
            self.search.start(&visible, selector.active_model());
        }
        self.host.drawer_open = true;
        debug!("Model drawer opened");
    }

    /// Hide the drawer without selecting
    pub fn close_drawer(&mut self) {
        ModelSelector::new(&self.models, self.host.drawer_open).dismiss(&mut self.host);
    }

    /// Number of rows visible for the current query
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.selector().visible_models(&self.search.query).len()
    }

    /// Move the drawer cursor down
    pub fn select_next(&mut self) {
        let count = self.visible_count();
        self.search.select_next(count);
    }

    /// Move the drawer cursor up
    pub fn select_prev(&mut self) {
        let count = self.visible_count();
        self.search.select_prev(count);
    }

    /// Type into the search box
    pub fn handle_char(&mut self, c: char) {
        self.search.handle_char(c);
    }

    /// Delete from the search box
    pub fn handle_backspace(&mut self) {
        self.search.handle_backspace();
    }

    /// Empty the search box
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Select the highlighted model. Returns `false` when nothing is visible.
    pub fn confirm_selection(&mut self) -> bool {
        ModelSelector::new(&self.models, self.host.drawer_open)
            .select_highlighted(&self.search, &mut self.host)
    }
}
