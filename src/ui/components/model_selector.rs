//! Model selector drawer widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::catalog::ModelDescriptor;
use crate::selector::{ModelSelector, SearchState, Segment, highlight_segments};
use crate::ui::colors;

use super::avatar::Widget as Avatar;

/// Narrowest drawer, in columns
pub const MIN_DRAWER_WIDTH: u16 = 34;

/// Drawer rectangle anchored to the right edge of `area`
#[must_use]
pub fn drawer_rect(area: Rect) -> Rect {
    let width = (area.width / 5 * 2).max(MIN_DRAWER_WIDTH).min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Widget drawing the model selector drawer
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    selector: ModelSelector<'a>,
    state: &'a SearchState,
}

/// Rendered list rows plus the row index of the cursor
#[derive(Debug)]
pub struct ListLines<'a> {
    /// One line per group header or model
    pub lines: Vec<Line<'a>>,
    /// Index into `lines` of the highlighted model, if any model is visible
    pub cursor_line: Option<usize>,
}

impl<'a> Widget<'a> {
    /// Create a drawer for `selector` with the caller's search state
    #[must_use]
    pub const fn new(selector: ModelSelector<'a>, state: &'a SearchState) -> Self {
        Self { selector, state }
    }

    /// The `Search:` line
    #[must_use]
    pub fn search_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                format!("{}_", self.state.query),
                Style::default().fg(colors::TEXT_PRIMARY).bg(colors::INPUT_BG),
            ),
        ])
    }

    /// Group headers and model rows for the current query
    #[must_use]
    pub fn list_lines(&self) -> ListLines<'a> {
        let query = self.state.query.as_str();
        let groups = self.selector.groups(query);
        let total: usize = groups.iter().map(|g| g.models.len()).sum();
        let cursor = self.state.cursor_in(total);

        let mut lines: Vec<Line<'a>> = Vec::new();
        let mut cursor_line = None;

        if groups.is_empty() {
            lines.push(Line::from(Span::styled(
                "No matching models",
                Style::default().fg(colors::TEXT_MUTED),
            )));
            return ListLines { lines, cursor_line };
        }

        let mut idx = 0;
        for group in groups {
            lines.push(Line::from(vec![
                Span::styled(
                    group.provider_name,
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", group.models.len()),
                    Style::default().fg(colors::TEXT_DIM),
                ),
            ]));

            for model in group.models {
                let is_cursor = cursor == Some(idx);
                if is_cursor {
                    cursor_line = Some(lines.len());
                }
                lines.push(self.model_line(model, query, is_cursor));
                idx += 1;
            }
        }

        ListLines { lines, cursor_line }
    }

    fn model_line(&self, model: &'a ModelDescriptor, query: &str, is_cursor: bool) -> Line<'a> {
        let is_active = self.selector.is_active(model);
        let avatar = Avatar::from_id(Some(model.provider_name())).icon();

        let text_color = if model.available {
            colors::TEXT_PRIMARY
        } else {
            colors::TEXT_MUTED
        };
        let mut row_style = Style::default().fg(text_color);
        if is_cursor {
            row_style = row_style
                .bg(colors::SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled(if is_cursor { "▶ " } else { "  " }, row_style),
            Span::styled(
                if is_active { "✓ " } else { "  " },
                row_style.fg(colors::ACCENT_POSITIVE),
            ),
            Span::styled(avatar.glyph, row_style.fg(avatar.color)),
            Span::styled(" ", row_style),
        ];

        spans.extend(
            highlight_segments(model.label(), query)
                .into_iter()
                .map(|segment| segment_span(segment, row_style)),
        );

        if model.is_default() {
            spans.push(Span::styled(
                " (default)",
                row_style.fg(colors::TEXT_DIM),
            ));
        }
        if !model.available {
            spans.push(Span::styled(
                " (unavailable)",
                row_style.fg(colors::TEXT_MUTED),
            ));
        }

        Line::from(spans)
    }
}

fn segment_span(segment: Segment<'_>, row_style: Style) -> Span<'_> {
    if segment.emphasized {
        Span::styled(
            segment.text,
            row_style
                .fg(colors::MATCH)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        Span::styled(segment.text, row_style)
    }
}

/// First list row to show so that `cursor_line` stays inside `height` rows
#[must_use]
pub const fn scroll_offset(cursor_line: Option<usize>, height: usize) -> usize {
    match cursor_line {
        Some(line) if height > 0 && line >= height => line + 1 - height,
        _ => 0,
    }
}

impl ratatui::widgets::Widget for Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.selector.is_visible() {
            return;
        }

        let drawer = drawer_rect(area);
        Clear.render(drawer, buf);

        let block = Block::default()
            .title(self.selector.title_text())
            .title_bottom(Line::from(Span::styled(
                " ↑/↓ move • Enter select • Esc close ",
                Style::default().fg(colors::TEXT_MUTED),
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .style(Style::default().bg(colors::DRAWER_BG));
        let inner = block.inner(drawer);
        block.render(drawer, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(self.search_line()).render(rows[0], buf);

        let ListLines { lines, cursor_line } = self.list_lines();
        let offset = scroll_offset(cursor_line, usize::from(rows[1].height));
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ModelProvider;
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor::new("gpt-4").with_provider("OpenAI"),
            ModelDescriptor::new("claude-3")
                .with_provider("Anthropic")
                .with_available(false),
            ModelDescriptor {
                is_default: Some(true),
                ..ModelDescriptor::new("gpt-4o").with_provider("OpenAI")
            },
        ]
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_drawer_rect_is_right_anchored() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = drawer_rect(area);
        assert_eq!(rect, Rect::new(60, 0, 40, 30));
    }

    #[test]
    fn test_drawer_rect_uses_min_width_and_fits() {
        assert_eq!(drawer_rect(Rect::new(0, 0, 50, 10)).width, MIN_DRAWER_WIDTH);
        assert_eq!(drawer_rect(Rect::new(0, 0, 20, 10)), Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 0), 0);
    }

    #[test]
    fn test_list_lines_have_headers_and_cursor() {
        let models = catalog();
        let state = SearchState::new();
        let selector = ModelSelector::new(&models, true);
        let ListLines { lines, cursor_line } = Widget::new(selector, &state).list_lines();

        let openai = ModelProvider::OpenAI.icon().glyph;
        let anthropic = ModelProvider::Anthropic.icon().glyph;
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "OpenAI (2)".to_string(),
                format!("▶   {openai} gpt-4"),
                format!("    {openai} gpt-4o (default)"),
                "Anthropic (1)".to_string(),
                format!("    {anthropic} claude-3 (unavailable)"),
            ]
        );
        assert_eq!(cursor_line, Some(1));

        // Each row carries its provider's avatar in the icon colour
        let avatar = &lines[4].spans[2];
        assert_eq!(avatar.content, anthropic);
        assert_eq!(avatar.style.fg, Some(ModelProvider::Anthropic.icon().color));
    }

    #[test]
    fn test_active_row_is_checked() {
        let models = catalog();
        let state = SearchState {
            query: String::new(),
            cursor: 1,
        };
        let selector = ModelSelector::new(&models, true).defaults(Some("gpt-4"), Some("OpenAI"));
        let ListLines { lines, cursor_line } = Widget::new(selector, &state).list_lines();
        assert_eq!(
            line_text(&lines[1]),
            format!("  ✓ {} gpt-4", ModelProvider::OpenAI.icon().glyph)
        );
        assert_eq!(cursor_line, Some(2));
    }

    #[test]
    fn test_query_is_highlighted() {
        let models = catalog();
        let state = SearchState {
            query: "4O".to_string(),
            cursor: 0,
        };
        let selector = ModelSelector::new(&models, true);
        let ListLines { lines, .. } = Widget::new(selector, &state).list_lines();
        assert_eq!(lines.len(), 2);
        let emphasized: Vec<&str> = lines[1]
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(colors::MATCH))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(emphasized, vec!["4o"]);
    }

    #[test]
    fn test_no_matches_message() {
        let models = catalog();
        let state = SearchState {
            query: "zzz".to_string(),
            cursor: 0,
        };
        let selector = ModelSelector::new(&models, true);
        let ListLines { lines, cursor_line } = Widget::new(selector, &state).list_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "No matching models");
        assert_eq!(cursor_line, None);
    }

    #[test]
    fn test_search_line_shows_query() {
        let models = catalog();
        let state = SearchState {
            query: "gpt".to_string(),
            cursor: 0,
        };
        let selector = ModelSelector::new(&models, true);
        assert_eq!(
            line_text(&Widget::new(selector, &state).search_line()),
            "Search: gpt_"
        );
    }

    #[test]
    fn test_hidden_drawer_draws_nothing() {
        let models = catalog();
        let state = SearchState::new();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        ratatui::widgets::Widget::render(
            Widget::new(ModelSelector::new(&models, false), &state),
            area,
            &mut buf,
        );
        assert_eq!(buf, Buffer::empty(area));
    }
}
