//! Provider avatar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::provider::{Icon, ModelProvider, icon_for};

/// Widget drawing one provider icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    provider: Option<ModelProvider>,
}

impl Widget {
    /// Avatar for a known provider; `None` draws the fallback icon
    #[must_use]
    pub const fn new(provider: Option<ModelProvider>) -> Self {
        Self { provider }
    }

    /// Avatar for a provider identifier; unknown identifiers draw the fallback icon
    #[must_use]
    pub fn from_id(id: Option<&str>) -> Self {
        Self::new(id.and_then(ModelProvider::parse))
    }

    /// Icon that will be drawn
    #[must_use]
    pub fn icon(self) -> Icon {
        icon_for(self.provider)
    }

    /// The icon as a styled span
    #[must_use]
    pub fn to_span(self) -> Span<'static> {
        let icon = self.icon();
        Span::styled(icon.glyph, Style::default().fg(icon.color))
    }

    /// The icon followed by a bold name
    #[must_use]
    pub fn labelled(self, name: &str) -> Line<'_> {
        Line::from(vec![
            self.to_span(),
            Span::raw(" "),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        ])
    }
}

impl ratatui::widgets::Widget for Widget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.to_span()).render(area, buf);
    }
}
