use std::fmt::Display;
use std::ops::Range;

use serde::Serialize;

/// Default minimum query length, in characters.
pub const MIN_QUERY_LEN: usize = 2;
/// Default cap on the number of suggestions shown.
pub const MAX_SUGGESTIONS: usize = 6;

/// Tunables for [`compute_suggestions_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

/// A candidate annotated with where the query matched it.
///
/// `before + matched + after` is always the candidate's display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion<T> {
    pub item: T,
    pub before: String,
    pub matched: String,
    pub after: String,
    pub(crate) selected: bool,
}

impl<T> Suggestion<T> {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The full display string the suggestion was built from.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.matched, self.after)
    }
}

/// Ordered, bounded list of suggestions with at most one selected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionSet<T> {
    pub(crate) items: Vec<Suggestion<T>>,
}

impl<T> Default for SuggestionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> SuggestionSet<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion<T>> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion<T>> {
        self.items.get(index)
    }

    /// Position of the selected suggestion, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|s| s.selected)
    }

    pub fn selected(&self) -> Option<&Suggestion<T>> {
        self.selected_index().map(|i| &self.items[i])
    }
}

impl<'a, T> IntoIterator for &'a SuggestionSet<T> {
    type Item = &'a Suggestion<T>;
    type IntoIter = std::slice::Iter<'a, Suggestion<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Compute suggestions with the default options (2 characters, 6 results).
pub fn compute_suggestions<T>(query: &str, candidates: &[T]) -> SuggestionSet<T>
where
    T: Display + Clone,
{
    compute_suggestions_with(query, candidates, SuggestOptions::default())
}

/// Filter `candidates` by case-insensitive substring match of `query`.
///
/// Candidate order is preserved and the first `max_suggestions` matches are
/// kept. The first suggestion comes back selected.
pub fn compute_suggestions_with<T>(
    query: &str,
    candidates: &[T],
    options: SuggestOptions,
) -> SuggestionSet<T>
where
    T: Display + Clone,
{
    if query.chars().count() < options.min_query_len {
        return SuggestionSet::empty();
    }

    let needle = fold_case(query);
    let items: Vec<Suggestion<T>> = candidates
        .iter()
        .filter_map(|item| {
            let text = item.to_string();
            let range = find_folded(&text, &needle)?;
            Some(Suggestion {
                item: item.clone(),
                before: text[..range.start].to_string(),
                matched: text[range.clone()].to_string(),
                after: text[range.end..].to_string(),
                selected: false,
            })
        })
        .take(options.max_suggestions)
        .enumerate()
        .map(|(i, mut s)| {
            s.selected = i == 0;
            s
        })
        .collect();

    tracing::debug!(
        query_len = query.chars().count(),
        matches = items.len(),
        "recomputed suggestions"
    );
    SuggestionSet { items }
}

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// The range always falls on character boundaries of `haystack`.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    find_folded(haystack, &fold_case(needle))
}

fn fold_case(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn find_folded(haystack: &str, needle: &[char]) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    'start: for (start, _) in haystack.char_indices() {
        let mut want = needle.iter().peekable();
        for (offset, ch) in haystack[start..].char_indices() {
            for lower in ch.to_lowercase() {
                match want.next() {
                    Some(&w) if w == lower => {}
                    _ => continue 'start,
                }
            }
            if want.peek().is_none() {
                return Some(start..start + offset + ch.len_utf8());
            }
        }
        // Ran out of haystack before the needle was consumed.
        return None;
    }
    None
}
