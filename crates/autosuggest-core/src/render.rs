use crate::suggest::SuggestionSet;

/// Presentation capability for a suggestion list.
///
/// Called with the full set after every change; an empty set means the
/// dropdown should be hidden.
pub trait Renderer<T> {
    fn render(&mut self, suggestions: &SuggestionSet<T>);
}

impl<T, R: Renderer<T> + ?Sized> Renderer<T> for &mut R {
    fn render(&mut self, suggestions: &SuggestionSet<T>) {
        (**self).render(suggestions);
    }
}

/// Renders suggestions as plain text lines.
///
/// The selected row is prefixed with `> `, others with two spaces, and the
/// matched text is wrapped in `[` `]`.
#[derive(Debug, Default, Clone)]
pub struct PlainTextRenderer {
    output: String,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl<T> Renderer<T> for PlainTextRenderer {
    fn render(&mut self, suggestions: &SuggestionSet<T>) {
        self.output.clear();
        for s in suggestions {
            let marker = if s.is_selected() { "> " } else { "  " };
            self.output
                .push_str(&format!("{marker}{}[{}]{}\n", s.before, s.matched, s.after));
        }
    }
}
