use thiserror::Error;
use reqwest::StatusCode;

/// Coarse classification of a [`BiliError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response.
    Transport,
    /// bilibili answered, but signalled failure or lacked the expected content.
    Application,
    /// A successful response was missing a field we read.
    Structural,
}

#[derive(Error, Debug)]
pub enum BiliError {
    #[error("Response error: {0}")]
    Response(String),
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("Initial state not found in page")]
    StateNotFound,
    #[error("Initial state parse error: {0}")]
    StateParse(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Credential has no SESSDATA")]
    CredentialNoSessdata,
    #[error("Credential has no bili_jct")]
    CredentialNoBiliJct,
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("Invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Not found")]
    NotFound,
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code")]
    UnknownStatusCode(StatusCode),
    #[error("Parse error")]
    ParseError(String),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl BiliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BiliError::Response(_) | BiliError::HttpError(_) => ErrorKind::Transport,
            BiliError::MissingField(_) => ErrorKind::Structural,
            _ => ErrorKind::Application,
        }
    }
}

pub type Result<T> = std::result::Result<T, BiliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(BiliError::Response("reset".to_string()).kind(), ErrorKind::Transport);
        assert_eq!(BiliError::StateNotFound.kind(), ErrorKind::Application);
        assert_eq!(BiliError::StateParse("eof".to_string()).kind(), ErrorKind::Application);
        assert_eq!(
            BiliError::Api { code: -404, message: "啥都木有".to_string() }.kind(),
            ErrorKind::Application
        );
        assert_eq!(
            BiliError::MissingField("has_more".to_string()).kind(),
            ErrorKind::Structural
        );
    }
}
