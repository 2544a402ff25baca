use crate::suggest::SuggestionSet;

/// Map an index that may have stepped off either end back into `0..len`.
///
/// Negative indices land on the last element, indices past the end land on
/// the first. An empty list always yields 0.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if index < 0 {
        return len.saturating_sub(1);
    }
    let index = index as usize;
    if index >= len { 0 } else { index }
}

impl<T> SuggestionSet<T> {
    /// Move the selection one entry up (wraps).
    ///
    /// Returns `false` if nothing was selected, in which case nothing moves.
    pub fn select_previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Move the selection one entry down (wraps).
    pub fn select_next(&mut self) -> bool {
        self.step(1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let Some(current) = self.selected_index() else {
            return false;
        };
        let target = wrap_index(current as isize + delta, self.items.len());
        self.items[current].selected = false;
        self.items[target].selected = true;
        true
    }
}
