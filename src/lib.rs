//! Model Picker - provider avatars and a searchable model drawer for terminal chat clients
//!
//! The library holds the two widgets (a provider avatar and a provider-grouped
//! model selector), the pure search/group/highlight logic behind them, and the
//! small amount of host state needed to drive them from a terminal UI.

pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod provider;
pub mod selector;
pub mod settings;
pub mod ui;

pub use app::App;
pub use catalog::{DEFAULT_PROVIDER_NAME, ModelDescriptor, ProviderRef};
pub use config::Config;
pub use provider::{Icon, ModelProvider};
pub use selector::{ModelSelector, SearchState, SelectionHandler};
pub use settings::Settings;
