//! Error handling for the transfer core
//!
//! This module defines the error types used throughout the transfer core.

use thiserror::Error;

/// Transfer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("No wallet connected")]
    NoWalletConnected,

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Signing or broadcast failure: {0}")]
    SigningOrBroadcast(String),

    #[error("Confirmation failure: {0}")]
    Confirmation(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl TransferError {
    /// Create an invalid recipient error
    pub fn invalid_recipient(message: impl Into<String>) -> Self {
        Self::InvalidRecipient(message.into())
    }

    /// Create an invalid amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Create a signing or broadcast error
    pub fn signing_or_broadcast(message: impl Into<String>) -> Self {
        Self::SigningOrBroadcast(message.into())
    }

    /// Create a confirmation error
    pub fn confirmation(message: impl Into<String>) -> Self {
        Self::Confirmation(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// True for pre-submission failures the caller can fix by correcting input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoWalletConnected
                | Self::InvalidRecipient(_)
                | Self::InvalidAmount(_)
                | Self::InsufficientBalance
        )
    }
}

impl From<bs58::decode::Error> for TransferError {
    fn from(err: bs58::decode::Error) -> Self {
        Self::invalid_recipient(format!("Base58 decoding error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_creation() {
        let recipient_error = TransferError::invalid_recipient("not base58");
        let amount_error = TransferError::invalid_amount("not a number");
        let network_error = TransferError::network("connection refused");

        assert!(matches!(recipient_error, TransferError::InvalidRecipient(_)));
        assert!(matches!(amount_error, TransferError::InvalidAmount(_)));
        assert!(matches!(network_error, TransferError::Network(_)));
    }

    #[test]
    fn test_error_display() {
        let error = TransferError::signing_or_broadcast("User rejected the request");
        let display = format!("{}", error);

        assert!(display.contains("Signing or broadcast failure"));
        assert!(display.contains("User rejected the request"));
    }

    #[test]
    fn test_validation_errors_are_recoverable() {
        assert!(TransferError::NoWalletConnected.is_validation());
        assert!(TransferError::InsufficientBalance.is_validation());
        assert!(TransferError::invalid_amount("x").is_validation());
        assert!(TransferError::invalid_recipient("x").is_validation());

        assert!(!TransferError::signing_or_broadcast("x").is_validation());
        assert!(!TransferError::confirmation("x").is_validation());
        assert!(!TransferError::network("x").is_validation());
    }

    #[test]
    fn test_base58_error_conversion() {
        let decode_error = bs58::decode("not-base58!").into_vec().unwrap_err();
        let error: TransferError = decode_error.into();

        assert!(matches!(error, TransferError::InvalidRecipient(_)));
    }
}
