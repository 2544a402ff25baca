use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Render the whole picker.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg())), size);

    let show_hints = app.config.ui.show_hints;
    let constraints = if show_hints {
        vec![
            Constraint::Length(3), // input
            Constraint::Min(0),    // dropdown space
            Constraint::Length(1), // status
            Constraint::Length(1), // hints
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_input(frame, app, chunks[0]);

    // Dropdown hangs off the input box, over the empty middle area
    let bounds = Rect {
        height: chunks[0].height + chunks[1].height,
        ..chunks[0]
    };
    let anchor = Rect {
        x: chunks[0].x + 1,
        height: chunks[0].height.saturating_sub(1),
        ..chunks[0]
    };
    let area = app.dropdown.area_below(anchor, bounds);
    app.dropdown.draw(frame, area, &app.theme);

    render_status(frame, app, chunks[2]);
    if show_hints {
        render_hints(frame, app, chunks[3]);
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.frost_ice()))
        .title(Span::styled(
            " autosuggest ",
            Style::default().fg(app.theme.frost_ice()).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (before, at, after) = app.input.split_at_cursor();
    let text_style = Style::default().fg(app.theme.fg());
    let line = Line::from(vec![
        Span::styled(
            app.config.ui.prompt.as_str(),
            Style::default().fg(app.theme.yellow()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(before, text_style),
        Span::styled(at.unwrap_or(" "), app.theme.cursor_style()),
        Span::styled(after, text_style),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.widget.suggestions().len();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.status_message),
            Style::default().fg(app.theme.fg()),
        ),
        Span::styled(
            format!(" {count} suggestions"),
            Style::default().fg(app.theme.muted()),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(app.theme.yellow());
    let label = Style::default().fg(app.theme.muted());
    let hints = Line::from(vec![
        Span::styled(" ↑/↓ ", key),
        Span::styled("select", label),
        Span::styled("  Enter ", key),
        Span::styled("accept", label),
        Span::styled("  Esc ", key),
        Span::styled("quit", label),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
