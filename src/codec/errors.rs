//! # Codec Errors

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Field parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid timestamp '{text}': {reason}")]
    InvalidTimestamp { text: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{0}' must be a string")]
    NotAString(&'static str),

    #[error("Expected an object")]
    NotAnObject,

    #[error("Invalid IPv4 address: {0}")]
    InvalidIpv4(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = CodecError::UnknownTimeZone("Mars/Olympus".into());
        assert!(err.to_string().contains("Mars/Olympus"));

        let err = CodecError::InvalidTimestamp {
            text: "2018-05-20".into(),
            reason: "input contains invalid characters".into(),
        };
        assert!(err.to_string().contains("2018-05-20"));
    }
}
