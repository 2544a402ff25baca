pub mod candidates;
pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod keys;
pub mod render;
pub mod suggest;
pub mod widget;

pub use candidates::{load_candidates, read_candidates};
pub use config::{AppConfig, LogConfig, SuggestConfig, UiConfig};
pub use cursor::wrap_index;
pub use error::{AutosuggestError, ExitCode, Result};
pub use input::{LineBuffer, TextInput};
pub use keys::{EventOutcome, Key, KeyAction, KeyPhase};
pub use render::{PlainTextRenderer, Renderer};
pub use suggest::{
    compute_suggestions, compute_suggestions_with, find_ignore_case, SuggestOptions, Suggestion,
    SuggestionSet, MAX_SUGGESTIONS, MIN_QUERY_LEN,
};
pub use widget::{Autocomplete, OnSelect};
