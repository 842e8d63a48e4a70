use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    RequestFailed,
    UnexpectedStatus,
    MalformedResponse,
}

/// A failed call to the ranking service, collapsed to the message a user sees.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Error {
    pub error_code: ErrorCode,
    pub user_feedback: String,
}

impl Error {
    pub fn new(error_code: ErrorCode, user_feedback: impl Into<String>) -> Self {
        Self {
            error_code,
            user_feedback: user_feedback.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_feedback)
    }
}

impl std::error::Error for Error {}
