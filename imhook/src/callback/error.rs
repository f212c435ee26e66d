//! Reasons a callback is rejected before it reaches a handler.
//!
//! The `Display` text of each variant is what the platform receives in
//! `ErrorInfo` alongside `ActionStatus: "FAIL"`.

use thiserror::Error;

use super::event::DecodeError;
use super::signature::SignatureError;

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("invalid sign")]
    MissingSign,
    #[error("invalid request time")]
    MissingRequestTime,
    #[error("parse request time err")]
    InvalidRequestTime,
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error("invalid sdk appId")]
    AppIdMismatch,
    #[error("invalid callback command")]
    MissingCommand,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    BodyRead(String),
}

/// Coarse classification of a [`CallbackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing signature, or a stale timestamp
    Authentication,
    /// Wrong or missing application id
    IdentityMismatch,
    /// Missing or unknown command, or a body that does not decode
    ProtocolViolation,
    /// The request body could not be read
    Transport,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::IdentityMismatch => "identity_mismatch",
            Self::ProtocolViolation => "protocol_violation",
            Self::Transport => "transport",
        }
    }
}

impl CallbackError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingSign
            | Self::MissingRequestTime
            | Self::InvalidRequestTime
            | Self::Signature(_) => ErrorKind::Authentication,
            Self::AppIdMismatch => ErrorKind::IdentityMismatch,
            Self::MissingCommand | Self::Decode(_) => ErrorKind::ProtocolViolation,
            Self::BodyRead(_) => ErrorKind::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_text() {
        assert_eq!(CallbackError::MissingSign.to_string(), "invalid sign");
        assert_eq!(CallbackError::MissingRequestTime.to_string(), "invalid request time");
        assert_eq!(CallbackError::InvalidRequestTime.to_string(), "parse request time err");
        assert_eq!(
            CallbackError::from(SignatureError::Expired).to_string(),
            "request time expired"
        );
        assert_eq!(
            CallbackError::from(SignatureError::Mismatch).to_string(),
            "invalid signature"
        );
        assert_eq!(CallbackError::AppIdMismatch.to_string(), "invalid sdk appId");
        assert_eq!(CallbackError::MissingCommand.to_string(), "invalid callback command");
        assert_eq!(
            CallbackError::from(DecodeError::UnknownCommand("x".to_string())).to_string(),
            "invalid callback command"
        );
        assert_eq!(
            CallbackError::BodyRead("length limit exceeded".to_string()).to_string(),
            "length limit exceeded"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CallbackError::from(SignatureError::Mismatch).kind(),
            ErrorKind::Authentication
        );
        assert_eq!(CallbackError::AppIdMismatch.kind(), ErrorKind::IdentityMismatch);
        assert_eq!(CallbackError::MissingCommand.kind(), ErrorKind::ProtocolViolation);
        assert_eq!(CallbackError::BodyRead(String::new()).kind(), ErrorKind::Transport);
        assert_eq!(ErrorKind::ProtocolViolation.as_str(), "protocol_violation");
    }
}
