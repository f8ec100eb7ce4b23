//! Core types for the transfer flow
//!
//! This module contains the data model shared across the transfer core:
//! addresses, balances, transfer requests, and outcomes.

use crate::core::amount;
use crate::shared::constants::PUBKEY_LENGTH;
use crate::shared::error::TransferError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature identifying a submitted transaction
pub type SubmissionId = String;

/// Base58-encoded account address (32-byte public key)
///
/// Parsing validates the encoding, so a constructed `Address` is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Address {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s).into_vec()?;
        if bytes.len() != PUBKEY_LENGTH {
            return Err(TransferError::invalid_recipient(format!(
                "expected a {}-byte public key, got {} bytes",
                PUBKEY_LENGTH,
                bytes.len()
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account balance, tracked in base units (lamports)
///
/// `Unknown` covers "query not yet run", "no identity connected", and
/// "query failed". Sufficiency checks against `Unknown` fail closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    Unknown,
    Known(u64),
}

impl Balance {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn lamports(&self) -> Option<u64> {
        match self {
            Self::Known(lamports) => Some(*lamports),
            Self::Unknown => None,
        }
    }

    /// Display-unit view of the balance, `None` while unknown.
    pub fn sol(&self) -> Option<f64> {
        self.lamports().map(amount::lamports_to_sol_f64)
    }

    /// Whether the balance is known and covers `lamports`. `Unknown`
    /// never covers anything.
    pub fn covers(&self, lamports: u64) -> bool {
        matches!(self, Self::Known(available) if *available >= lamports)
    }
}

/// Transfer request as entered by the user, pre-validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: String,
}

/// Transfer that passed validation: a well-formed recipient and a
/// positive base-unit amount
///
/// Only the validator constructs these; the fields cannot be set
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransfer {
    recipient: Address,
    lamports: u64,
}

impl ValidatedTransfer {
    pub(crate) fn new(recipient: Address, lamports: u64) -> Self {
        Self { recipient, lamports }
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn lamports(&self) -> u64 {
        self.lamports
    }
}

/// Single native-token transfer instruction: sender, recipient, amount
/// in base units. The sender pays the fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    pub from: Address,
    pub to: Address,
    pub lamports: u64,
}

/// Ledger commitment levels for confirmation queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitmentLevel {
    Processed,
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

/// Stages of a submission attempt, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStage {
    Building,
    Submitted,
    Confirming,
    Confirmed,
}

/// Terminal result of one submission attempt
///
/// `Failed` records the stage that was reached when the attempt failed,
/// so callers can tell "never signed" from "signed but not confirmed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Confirmed { signature: SubmissionId },
    Failed { stage: TransferStage, error: TransferError },
}

impl TransferOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            Self::Confirmed { signature } => Some(signature),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&TransferError> {
        match self {
            Self::Confirmed { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
