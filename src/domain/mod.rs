//! Domain layer: collaborator interfaces
//!
//! This module contains the interfaces the transfer core consumes but
//! does not implement: the wallet capability and the ledger connection.

pub mod collaborators;

pub use collaborators::{LedgerConnection, WalletCapability};
