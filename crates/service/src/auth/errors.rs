use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Why a caller could not be authenticated.
///
/// Every variant is handled the same way (the request is rejected); the
/// distinction exists for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("empty auth header")]
    EmptyHeader,
    #[error("invalid auth header")]
    MalformedHeader,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("malformed token: {0}")]
    MalformedToken(String),
    #[error("token expired")]
    ExpiredToken,
    #[error("invalid token signature")]
    BadSignature,
    #[error("unexpected signing algorithm")]
    AlgorithmMismatch,
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::EmptyHeader => 1101,
            AuthError::MalformedHeader => 1102,
            AuthError::InvalidCredentials => 1004,
            AuthError::MalformedToken(_) => 1103,
            AuthError::ExpiredToken => 1104,
            AuthError::BadSignature => 1105,
            AuthError::AlgorithmMismatch => 1106,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            ErrorKind::InvalidSignature => AuthError::BadSignature,
            ErrorKind::InvalidAlgorithm => AuthError::AlgorithmMismatch,
            _ => AuthError::MalformedToken(e.to_string()),
        }
    }
}
