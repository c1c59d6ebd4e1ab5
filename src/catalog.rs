//! Model descriptors and catalog loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::provider::ModelProvider;

/// Provider name used when a descriptor does not name its provider.
pub const DEFAULT_PROVIDER_NAME: &str = ModelProvider::FALLBACK.as_str();

/// Errors raised while loading a model catalog
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog file could not be read
    #[error("failed to read model catalog {}", path.display())]
    Read {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not valid catalog JSON
    #[error("failed to parse model catalog {}", path.display())]
    Parse {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Reference to the provider that owns a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRef {
    /// Provider name, also the grouping key in the selector
    pub provider_name: String,
}

/// One selectable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model name, unique within its provider
    pub name: String,

    /// Name shown in the UI instead of `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether the model can currently be used
    #[serde(default = "default_available")]
    pub available: bool,

    /// Owning provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderRef>,

    /// Whether the catalog marks this model as its default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Ordering hint; lower sorts first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

const fn default_available() -> bool {
    true
}

impl ModelDescriptor {
    /// Create an available model with no provider and no display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            available: true,
            provider: None,
            is_default: None,
            sort_order: None,
        }
    }

    /// Set the owning provider
    #[must_use]
    pub fn with_provider(mut self, provider_name: impl Into<String>) -> Self {
        self.provider = Some(ProviderRef {
            provider_name: provider_name.into(),
        });
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set availability
    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Provider name, or [`DEFAULT_PROVIDER_NAME`] when none is set
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider
            .as_ref()
            .map_or(DEFAULT_PROVIDER_NAME, |p| p.provider_name.as_str())
    }

    /// Text shown for the model: the display name, falling back to the name
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Stable identity of the model, `name@provider`
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{}@{}", self.name, self.provider_name())
    }

    /// Whether the catalog flags this model as the default
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ModelDescriptor>),
    Wrapped { models: Vec<ModelDescriptor> },
}

/// Parse catalog JSON: either an array of models or `{ "models": [...] }`
///
/// # Errors
///
/// Returns an error if the text is not valid catalog JSON
pub fn parse(contents: &str) -> serde_json::Result<Vec<ModelDescriptor>> {
    let file: CatalogFile = serde_json::from_str(contents)?;
    Ok(match file {
        CatalogFile::List(models) | CatalogFile::Wrapped { models } => models,
    })
}

/// Load a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load(path: &Path) -> Result<Vec<ModelDescriptor>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let models = parse(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(count = models.len(), "Loaded model catalog from {}", path.display());
    Ok(models)
}

/// Stable sort by `sort_order`; models without one keep their place after the ordered ones
pub fn sort_by_order(models: &mut [ModelDescriptor]) {
    models.sort_by_key(|m| (m.sort_order.is_none(), m.sort_order.unwrap_or(0)));
    debug!(count = models.len(), "Sorted catalog by sort order");
}

/// A small built-in catalog used when no catalog file is configured
#[must_use]
pub fn builtin() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new("gpt-4o")
            .with_display_name("GPT-4o")
            .with_provider("OpenAI"),
        ModelDescriptor::new("gpt-4o-mini")
            .with_display_name("GPT-4o mini")
            .with_provider("OpenAI"),
        ModelDescriptor::new("o3-mini").with_provider("OpenAI"),
        ModelDescriptor::new("claude-3-7-sonnet-latest")
            .with_display_name("Claude 3.7 Sonnet")
            .with_provider("Anthropic"),
        ModelDescriptor::new("claude-3-5-haiku-latest")
            .with_display_name("Claude 3.5 Haiku")
            .with_provider("Anthropic"),
        ModelDescriptor::new("gemini-2.0-flash")
            .with_display_name("Gemini 2.0 Flash")
            .with_provider("Google"),
        ModelDescriptor::new("qwen-max")
            .with_display_name("Qwen Max")
            .with_provider("Alibaba"),
        ModelDescriptor::new("moonshot-v1-8k").with_provider("Moonshot"),
        ModelDescriptor::new("glm-4").with_provider("ChatGLM"),
        ModelDescriptor::new("grok-2")
            .with_display_name("Grok 2")
            .with_provider("XAI")
            .with_available(false),
    ]
}
