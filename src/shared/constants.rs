//! Constants for the transfer core
//!
//! This module contains all constants used throughout the transfer core.

use crate::shared::types::CommitmentLevel;

// Unit scale: the ledger's known ratio between the base unit (lamport)
// and the display unit (SOL). Not configurable at runtime.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const SOL_DECIMALS: usize = 9;

// Address validation constants
pub const PUBKEY_LENGTH: usize = 32;
pub const MIN_ADDRESS_LENGTH: usize = 32; // shortest base58 rendering of 32 bytes
pub const MAX_ADDRESS_LENGTH: usize = 44; // longest base58 rendering of 32 bytes

// Network configuration
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const ENV_RPC_URL: &str = "SOLPAY_RPC_URL";

// Confirmation settings: single finality tier, fixed polling cadence
pub const CONFIRMATION_COMMITMENT: CommitmentLevel = CommitmentLevel::Confirmed;
pub const CONFIRMATION_POLL_INTERVAL_MS: u64 = 2_000;
pub const CONFIRMATION_TIMEOUT_MS: u64 = 90_000;

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
