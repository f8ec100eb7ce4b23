//! Infrastructure layer
//!
//! Concrete collaborator implementations. Only a thin JSON-RPC ledger
//! connection lives here; wallets stay external.

pub mod rpc;

pub use rpc::HttpLedgerConnection;
