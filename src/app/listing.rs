//! Plain-text rendering of the grouped catalog, for non-interactive output

use crate::catalog::ModelDescriptor;
use crate::provider::icon_for_id;
use crate::selector::ModelSelector;

/// Render the models visible for `query` as indented text, one group per block.
///
/// Each row carries its provider's glyph. Active models are marked with `*`,
/// catalog defaults and unavailable models get a trailing tag.
#[must_use]
pub fn listing(selector: &ModelSelector<'_>, query: &str) -> String {
    let mut out = String::new();
    for group in selector.groups(query) {
        out.push_str(group.provider_name);
        out.push('\n');
        for model in group.models {
            out.push_str(&row(selector, model));
            out.push('\n');
        }
    }
    out
}

fn row(selector: &ModelSelector<'_>, model: &ModelDescriptor) -> String {
    let marker = if selector.is_active(model) { '*' } else { ' ' };
    let glyph = icon_for_id(Some(model.provider_name())).glyph;
    let mut line = format!("  {marker} {glyph} {}", model.label());
    if model.label() != model.name {
        line.push_str(&format!(" [{}]", model.name));
    }
    if model.is_default() {
        line.push_str(" (default)");
    }
    if !model.available {
        line.push_str(" (unavailable)");
    }
    line
}
