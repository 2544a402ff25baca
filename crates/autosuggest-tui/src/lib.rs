pub mod app;
pub mod dropdown;
pub mod event;
pub mod keys;
pub mod theme;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{AppEvent, EventHandler};

pub use dropdown::{DropdownRow, DropdownView};
pub use theme::NordTheme;

/// Run the interactive picker until the user quits.
///
/// Returns the picked value, or `None` if the user backed out.
pub fn run_picker(app: &mut App) -> Result<Option<String>> {
    // Install panic hook
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = std::io::stderr().execute(LeaveAlternateScreen);
        original_hook(info);
    }));

    // Setup terminal. Draw on stderr so stdout stays free for the result.
    enable_raw_mode()?;
    io::stderr().execute(EnterAlternateScreen)?;
    io::stderr().execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let event_handler = EventHandler::new(Duration::from_millis(app.config.ui.tick_rate_ms));
    tracing::debug!(candidates = app.widget.candidates().len(), "picker started");

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, app)) {
            break Err(e.into());
        }

        match event_handler.next() {
            Ok(AppEvent::Key(key)) => keys::handle_key(app, key.code, key.modifiers),
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Resize(_, _)) | Ok(AppEvent::Tick) => {}
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(app.picked.clone());
        }
    };

    // Restore terminal
    io::stderr().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    result
}
