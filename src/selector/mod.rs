//! Model selector: search, provider grouping, highlighting and selection
//!
//! [`ModelSelector`] holds the caller-supplied inputs for one render (the
//! model slice, visibility, title and the current default model/provider).
//! The query text lives in a separate [`SearchState`] owned by the caller,
//! and selections are reported through a [`SelectionHandler`].

mod highlight;
mod search;
mod state;

pub use highlight::{Segment, highlight_segments};
pub use search::{ModelGroup, contains_ignore_case, filter_models, group_by_provider, grouped_models};
pub use state::SearchState;

use tracing::debug;

use crate::catalog::ModelDescriptor;

/// Title used when the caller does not provide one
pub const DEFAULT_TITLE: &str = " Models ";

/// Receives selector callbacks
pub trait SelectionHandler {
    /// A model was chosen
    fn on_selection(&mut self, model: &ModelDescriptor);

    /// The selector asked to be closed
    fn on_close(&mut self);
}

/// Inputs for one model selector render
#[derive(Debug, Clone, Copy)]
pub struct ModelSelector<'a> {
    models: &'a [ModelDescriptor],
    visible: bool,
    title: Option<&'a str>,
    default_model: Option<&'a str>,
    default_provider: Option<&'a str>,
}

impl<'a> ModelSelector<'a> {
    /// Create a selector over `models`
    #[must_use]
    pub const fn new(models: &'a [ModelDescriptor], visible: bool) -> Self {
        Self {
            models,
            visible,
            title: None,
            default_model: None,
            default_provider: None,
        }
    }

    /// Set the drawer title
    #[must_use]
    pub const fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    /// Set the currently selected default model and provider
    #[must_use]
    pub const fn defaults(
        mut self,
        default_model: Option<&'a str>,
        default_provider: Option<&'a str>,
    ) -> Self {
        self.default_model = default_model;
        self.default_provider = default_provider;
        self
    }

    /// Whether the drawer should be drawn
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drawer title, falling back to [`DEFAULT_TITLE`]
    #[must_use]
    pub fn title_text(&self) -> &'a str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }

    /// Visible models grouped by provider for the given query
    #[must_use]
    pub fn groups(&self, query: &str) -> Vec<ModelGroup<'a>> {
        grouped_models(self.models, query)
    }

    /// Visible models in display order (groups flattened)
    #[must_use]
    pub fn visible_models(&self, query: &str) -> Vec<&'a ModelDescriptor> {
        self.groups(query)
            .into_iter()
            .flat_map(|g| g.models)
            .collect()
    }

    /// Whether `model` is the caller's current default.
    ///
    /// Both the name and the effective provider name must match exactly.
    #[must_use]
    pub fn is_active(&self, model: &ModelDescriptor) -> bool {
        self.default_model.is_some_and(|name| model.name == name)
            && self
                .default_provider
                .is_some_and(|provider| model.provider_name() == provider)
    }

    /// First model matching the caller's default, if any
    #[must_use]
    pub fn active_model(&self) -> Option<&'a ModelDescriptor> {
        self.models.iter().find(|m| self.is_active(m))
    }

    /// Choose `model`: report it, then close
    pub fn select(&self, model: &ModelDescriptor, handler: &mut impl SelectionHandler) {
        debug!(title = self.title_text(), model = %model.identity(), "Model selected");
        handler.on_selection(model);
        handler.on_close();
    }

    /// Choose the row under the cursor. Returns `false` when nothing is visible.
    pub fn select_highlighted(
        &self,
        state: &SearchState,
        handler: &mut impl SelectionHandler,
    ) -> bool {
        let visible = self.visible_models(&state.query);
        let Some(model) = state.cursor_in(visible.len()).map(|i| visible[i]) else {
            return false;
        };
        self.select(model, handler);
        true
    }

    /// Dismiss without choosing anything
    pub fn dismiss(&self, handler: &mut impl SelectionHandler) {
        debug!(title = self.title_text(), "Model selector dismissed");
        handler.on_close();
    }
}
