#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("Token not found. Please run 'clubhub auth' to configure.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ClubResult<T> = Result<T, ClubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ClubResult<T>;
    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ClubResult<T> {
        self.map_err(|e| ClubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ClubResult<T> {
        self.ok_or_else(|| ClubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ClubError::Unknown(f()))
    }
}
