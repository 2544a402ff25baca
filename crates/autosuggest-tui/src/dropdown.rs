use autosuggest_core::{Renderer, SuggestionSet};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};
use ratatui::Frame;

use crate::theme::NordTheme;

/// One visible dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRow {
    pub before: String,
    pub matched: String,
    pub after: String,
    pub selected: bool,
}

/// Suggestion dropdown drawn under the input line.
///
/// `render` snapshots the suggestion set; `draw` paints the snapshot on the
/// next frame. Hidden while there are no rows.
#[derive(Debug, Default, Clone)]
pub struct DropdownView {
    rows: Vec<DropdownRow>,
}

impl<T> Renderer<T> for DropdownView {
    fn render(&mut self, suggestions: &SuggestionSet<T>) {
        self.rows = suggestions
            .iter()
            .map(|s| DropdownRow {
                before: s.before.clone(),
                matched: s.matched.clone(),
                after: s.after.clone(),
                selected: s.is_selected(),
            })
            .collect();
    }
}

impl DropdownView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[DropdownRow] {
        &self.rows
    }

    pub fn is_visible(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Rows plus top and bottom border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    /// Area directly below `anchor`, clipped to `bounds`.
    pub fn area_below(&self, anchor: Rect, bounds: Rect) -> Rect {
        let y = anchor.y.saturating_add(anchor.height);
        let available = bounds.bottom().saturating_sub(y);
        let widest = self
            .rows
            .iter()
            .map(|r| r.before.chars().count() + r.matched.chars().count() + r.after.chars().count())
            .max()
            .unwrap_or(0);
        let widest = u16::try_from(widest).unwrap_or(u16::MAX);
        let width = widest
            .saturating_add(6)
            .max(20)
            .min(bounds.right().saturating_sub(anchor.x));

        Rect {
            x: anchor.x,
            y,
            width,
            height: self.height().min(available),
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &NordTheme) {
        if !self.is_visible() || area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let (marker, text_style) = if row.selected {
                    ("▶ ", theme.selected_row_style())
                } else {
                    ("  ", Style::default().fg(theme.fg()))
                };
                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.frost_ice())),
                    Span::styled(row.before.as_str(), text_style),
                    Span::styled(row.matched.as_str(), text_style.patch(theme.match_style())),
                    Span::styled(row.after.as_str(), text_style),
                ]);
                let item = ListItem::new(line);
                if row.selected {
                    item.style(theme.selected_row_style())
                } else {
                    item
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dropdown_border()))
            .style(Style::default().bg(theme.bg()));

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosuggest_core::compute_suggestions;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn fruit_view() -> DropdownView {
        let mut view = DropdownView::new();
        view.render(&compute_suggestions("ap", &["Apple", "Banana", "Grape", "Pineapple"]));
        view
    }

    fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_render_snapshots_rows() {
        let view = fruit_view();
        assert_eq!(view.rows().len(), 3);
        assert_eq!(
            view.rows()[0],
            DropdownRow {
                before: String::new(),
                matched: "Ap".to_string(),
                after: "ple".to_string(),
                selected: true,
            }
        );
        assert!(!view.rows()[2].selected);
        assert_eq!(view.height(), 5);
    }

    #[test]
    fn test_empty_set_hides_dropdown() {
        let mut view = fruit_view();
        view.render(&SuggestionSet::<&str>::empty());
        assert!(!view.is_visible());
    }

    #[test]
    fn test_area_below_is_clipped() {
        let view = fruit_view();
        let anchor = Rect::new(2, 1, 30, 1);
        let bounds = Rect::new(0, 0, 40, 5);
        let area = view.area_below(anchor, bounds);
        assert_eq!(area.y, 2);
        assert_eq!(area.height, 3);
        assert!(area.right() <= bounds.right());
    }

    #[test]
    fn test_area_below_long_row_fits_bounds() {
        let long = format!("ap{}", "x".repeat(65_530));
        let mut view = DropdownView::new();
        view.render(&compute_suggestions("ap", &[long]));

        let area = view.area_below(Rect::new(1, 0, 80, 2), Rect::new(0, 0, 80, 10));
        assert_eq!(area.width, 79);
        assert_eq!(area.height, 3);
    }

    #[test]
    fn test_height_saturates_with_many_rows() {
        let candidates: Vec<String> = (0..70_000).map(|i| format!("ap{i}")).collect();
        let options = autosuggest_core::SuggestOptions {
            min_query_len: 2,
            max_suggestions: usize::MAX,
        };
        let mut view = DropdownView::new();
        view.render(&autosuggest_core::compute_suggestions_with("ap", &candidates, options));
        assert_eq!(view.height(), u16::MAX);
    }

    #[test]
    fn test_draw_shows_rows_with_marker() {
        let view = fruit_view();
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        let theme = NordTheme::default();
        terminal
            .draw(|frame| view.draw(frame, Rect::new(0, 0, 30, 5), &theme))
            .unwrap();

        let lines = buffer_lines(&terminal);
        assert!(lines[1].contains("▶ Apple"), "got {:?}", lines[1]);
        assert!(lines[2].contains("  Grape"));
        assert!(lines[3].contains("  Pineapple"));
        assert!(lines[5].trim().is_empty());
    }
}
