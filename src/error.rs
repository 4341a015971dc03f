//! Errors raised by the subnet calculator.

use thiserror::Error;

/// Caller-input errors. Neither is retryable: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The text does not denote a canonical dotted-quad IPv4 address.
    #[error("invalid ip: {0}")]
    InvalidAddress(String),
    /// The prefix length is outside `[0, 32]`.
    #[error("invalid cidr: {0}")]
    InvalidPrefix(String),
}

impl CalcError {
    /// Name of the error variant, for callers that want the tag without the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidAddress(_) => "InvalidAddress",
            CalcError::InvalidPrefix(_) => "InvalidPrefix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = CalcError::InvalidAddress("192.168.0.1000".to_string());
        assert_eq!(e.to_string(), "invalid ip: 192.168.0.1000");
        assert_eq!(e.kind(), "InvalidAddress");

        let e = CalcError::InvalidPrefix("44".to_string());
        assert_eq!(e.to_string(), "invalid cidr: 44");
        assert_eq!(e.kind(), "InvalidPrefix");
    }
}
