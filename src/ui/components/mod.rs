//! Widget implementations

pub mod avatar;
pub mod model_selector;
