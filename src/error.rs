use thiserror::Error;

/// Errors raised while bringing the dashboard up.
///
/// Requests made once the dashboard is running never surface here; they are
/// folded into [`crate::api::ApiResult`] and shown by the section that made them.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid config: {message}")]
    Config { message: String },

    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
