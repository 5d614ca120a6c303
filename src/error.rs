use thiserror::Error;

/// Every failure a user action can end in. All variants funnel into the
/// single error channel on the screen; the Display strings are the
/// user-visible messages.
#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("Please enter a ticker symbol")]
    EmptyTicker,

    /// Non-2xx response from the analysis endpoint. The message is the
    /// server-supplied `error` field, or the default fallback.
    #[error("{message}")]
    Request { message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Clipboard write rejected; the underlying reason is kept for logging
    /// but the user sees the fixed message.
    #[error("Failed to copy text")]
    Clipboard(String),

    #[error("Nothing to copy yet")]
    NothingToCopy,
}

pub type Result<T> = std::result::Result<T, AnalystError>;
