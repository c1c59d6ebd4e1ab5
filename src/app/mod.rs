//! Application state and logic

mod host;
mod listing;
mod state;

pub use crate::config::Config;
pub use crate::settings::Settings;
pub use host::{Host, Notice};
pub use listing::listing;
pub use state::App;
