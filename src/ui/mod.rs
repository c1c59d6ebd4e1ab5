//! UI components for the picker
//!
//! Reusable widgets: the provider avatar and the model selector drawer.
//! The terminal event loop that hosts them lives in the binary crate's `tui` module.

pub mod colors;
mod components;

pub use components::{
    avatar::Widget as ProviderAvatar,
    model_selector::{
        ListLines, MIN_DRAWER_WIDTH, Widget as ModelSelectorWidget, drawer_rect, scroll_offset,
    },
};
