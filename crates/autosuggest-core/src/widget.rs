use std::fmt::{self, Display};

use crate::input::TextInput;
use crate::keys::{route, EventOutcome, Key, KeyAction, KeyPhase};
use crate::render::Renderer;
use crate::suggest::{compute_suggestions_with, SuggestOptions, SuggestionSet};

/// Maps a confirmed item to the text written back into the input.
/// `None` clears the input.
pub type OnSelect<T> = Box<dyn FnMut(&T) -> Option<String>>;

/// Autocomplete controller bound to one text input.
///
/// The host owns the event loop: it forwards keys through [`on_key_down`]
/// and [`on_key_up`], honours the returned [`EventOutcome`], and calls
/// [`render`] whenever it redraws.
///
/// [`on_key_down`]: Autocomplete::on_key_down
/// [`on_key_up`]: Autocomplete::on_key_up
/// [`render`]: Autocomplete::render
pub struct Autocomplete<T> {
    candidates: Vec<T>,
    query: String,
    suggestions: SuggestionSet<T>,
    options: SuggestOptions,
    on_select: Option<OnSelect<T>>,
}

impl<T> Autocomplete<T>
where
    T: Display + Clone,
{
    pub fn new(candidates: Vec<T>) -> Self {
        Self {
            candidates,
            query: String::new(),
            suggestions: SuggestionSet::empty(),
            options: SuggestOptions::default(),
            on_select: None,
        }
    }

    pub fn with_options(mut self, options: SuggestOptions) -> Self {
        self.options = options;
        self.recompute();
        self
    }

    /// Without a callback the item's display string is used.
    pub fn with_on_select<F>(mut self, on_select: F) -> Self
    where
        F: FnMut(&T) -> Option<String> + 'static,
    {
        self.on_select = Some(Box::new(on_select));
        self
    }

    // ── State ──────────────────────────────────────

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &SuggestionSet<T> {
        &self.suggestions
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn options(&self) -> SuggestOptions {
        self.options
    }

    /// Replace the candidate list. Suggestions are recomputed for the
    /// current query and the selection goes back to the first entry.
    pub fn set_candidates(&mut self, candidates: Vec<T>) {
        self.candidates = candidates;
        self.recompute();
    }

    /// Store a new query. Suggestions are only recomputed when the text
    /// actually changed, so re-reading an unchanged input keeps the
    /// current selection.
    pub fn on_query_change(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.suggestions = compute_suggestions_with(&self.query, &self.candidates, self.options);
    }

    // ── Selection ──────────────────────────────────

    pub fn select_previous(&mut self) -> bool {
        self.suggestions.select_previous()
    }

    pub fn select_next(&mut self) -> bool {
        self.suggestions.select_next()
    }

    /// Accept the selected suggestion: write the callback's result into
    /// `input` and clear the query. Returns `false` if nothing was selected.
    pub fn confirm_selection(&mut self, input: &mut dyn TextInput) -> bool {
        let Some(item) = self.suggestions.selected().map(|s| s.item.clone()) else {
            return false;
        };

        let value = match self.on_select.as_mut() {
            Some(on_select) => on_select(&item),
            None => Some(item.to_string()),
        };
        let value = value.unwrap_or_default();
        tracing::debug!(item = %item, value = %value, "confirmed suggestion");

        input.set_text(value);
        self.on_query_change("");
        true
    }

    // ── Keys ───────────────────────────────────────

    pub fn on_key_down(&mut self, key: Key, input: &mut dyn TextInput) -> EventOutcome {
        self.handle_key(KeyPhase::Down, key, input)
    }

    pub fn on_key_up(&mut self, key: Key, input: &mut dyn TextInput) -> EventOutcome {
        self.handle_key(KeyPhase::Up, key, input)
    }

    pub fn handle_key(
        &mut self,
        phase: KeyPhase,
        key: Key,
        input: &mut dyn TextInput,
    ) -> EventOutcome {
        match route(phase, key) {
            KeyAction::SelectPrevious => EventOutcome::from_handled(self.select_previous()),
            KeyAction::SelectNext => EventOutcome::from_handled(self.select_next()),
            KeyAction::Confirm => EventOutcome::from_handled(self.confirm_selection(input)),
            KeyAction::Suppress => EventOutcome::Handled,
            KeyAction::SyncQuery => {
                let text = input.text().to_string();
                self.on_query_change(&text);
                EventOutcome::Propagate
            }
            KeyAction::Ignore => EventOutcome::Propagate,
        }
    }

    // ── Rendering ──────────────────────────────────

    pub fn render<R>(&self, renderer: &mut R)
    where
        R: Renderer<T> + ?Sized,
    {
        renderer.render(&self.suggestions);
    }
}

impl<T: fmt::Debug> fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("candidates", &self.candidates)
            .field("query", &self.query)
            .field("suggestions", &self.suggestions)
            .field("options", &self.options)
            .field("on_select", &self.on_select.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
