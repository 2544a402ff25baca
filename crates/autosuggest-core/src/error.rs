use thiserror::Error;

/// All errors that can occur in autosuggest-core.
#[derive(Debug, Error)]
pub enum AutosuggestError {
    #[error("Candidate source is empty: {0}")]
    EmptyCandidates(String),

    #[error("Candidate file not found: {0}")]
    CandidatesNotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Exit codes used by the `autosuggest` binary.
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    NotFound = 2,
    InvalidArgs = 3,
    NothingSelected = 4,
}

impl AutosuggestError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::CandidatesNotFound(_) => ExitCode::NotFound,
            Self::ConfigError(_) | Self::TomlParse(_) => ExitCode::InvalidArgs,
            _ => ExitCode::GeneralError,
        }
    }
}

pub type Result<T> = std::result::Result<T, AutosuggestError>;
