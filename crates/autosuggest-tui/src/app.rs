use autosuggest_core::{AppConfig, Autocomplete, EventOutcome, Key, LineBuffer, TextInput};

use crate::dropdown::DropdownView;
use crate::theme::NordTheme;

/// State of the interactive picker.
pub struct App {
    pub config: AppConfig,
    pub theme: NordTheme,
    pub widget: Autocomplete<String>,
    pub input: LineBuffer,
    pub dropdown: DropdownView,
    /// Last confirmed value, returned to the caller on exit.
    pub picked: Option<String>,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, candidates: Vec<String>) -> Self {
        let widget = Autocomplete::new(candidates).with_options(config.suggest_options());
        let status_message = format!("{} candidates", widget.candidates().len());
        let mut app = Self {
            config,
            theme: NordTheme::default(),
            widget,
            input: LineBuffer::new(),
            dropdown: DropdownView::new(),
            picked: None,
            status_message,
            should_quit: false,
        };
        app.refresh_dropdown();
        app
    }

    /// Push the widget's current suggestions into the dropdown snapshot.
    pub fn refresh_dropdown(&mut self) {
        self.widget.render(&mut self.dropdown);
    }

    /// Run one key through the widget as a keydown/keyup pair.
    ///
    /// `edit` is the key's default action on the input; it only runs when
    /// the widget lets the keydown through.
    pub fn press(&mut self, key: Key, edit: impl FnOnce(&mut LineBuffer)) -> EventOutcome {
        let down = self.widget.on_key_down(key, &mut self.input);
        if down == EventOutcome::Propagate {
            edit(&mut self.input);
        } else if key == Key::Enter {
            self.picked = Some(self.input.text().to_string());
            self.status_message = format!("Picked: {}", self.input.text());
            tracing::info!(value = %self.input.text(), "picked");
        }
        self.widget.on_key_up(key, &mut self.input);
        self.refresh_dropdown();
        down
    }

    /// Insert pasted text, then resync the query once.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.input.insert_char(c);
        }
        self.widget.on_key_up(Key::Other, &mut self.input);
        self.refresh_dropdown();
    }
}
