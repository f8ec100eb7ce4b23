//! Collaborator interfaces consumed by the transfer core
//!
//! The core orchestrates two external collaborators: a wallet that owns
//! the connected identity and performs signing, and a ledger connection
//! that answers balance and confirmation queries. Both are injected so
//! tests can substitute doubles.

use crate::shared::error::TransferError;
use crate::shared::types::{Address, CommitmentLevel, SubmissionId, TransferInstruction};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Wallet capability: connected identity plus sign-and-send
///
/// Key management and the signing implementation live behind this
/// trait; the core never sees private keys.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WalletCapability: Send + Sync {
    /// The connected account, if any.
    fn identity(&self) -> Option<Address>;

    /// Sign and broadcast a transfer instruction, returning the
    /// submission signature. Fails if the user rejects signing or the
    /// broadcast errors.
    async fn sign_and_send(
        &self,
        instruction: &TransferInstruction,
    ) -> Result<SubmissionId, TransferError>;
}

/// Ledger connection: balance and confirmation queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerConnection: Send + Sync {
    /// Current balance of `address` in base units.
    async fn get_balance(&self, address: &Address) -> Result<u64, TransferError>;

    /// Wait until `signature` reaches the given commitment level.
    async fn confirm_transaction(
        &self,
        signature: &str,
        commitment: CommitmentLevel,
    ) -> Result<(), TransferError>;
}
