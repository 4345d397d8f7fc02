use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("Invalid username or password")]
    AuthFailed,

    #[error("The session is not authenticated")]
    NotAuthenticated,

    #[error("Editing requires an authenticated editor profile")]
    EditLocked,

    #[error("A {operation} request is already in flight")]
    Busy { operation: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RaceResult<T> = Result<T, RaceError>;
