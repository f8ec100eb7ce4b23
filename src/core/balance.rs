//! Balance oracle
//!
//! Tracks the connected account's last-known balance. The oracle owns
//! the single shared `Balance` slot; nothing else writes it.

use crate::domain::collaborators::LedgerConnection;
use crate::shared::types::{Address, Balance};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Balance oracle for the connected identity
pub struct BalanceOracle {
    ledger: Arc<dyn LedgerConnection>,
    balance: RwLock<Balance>,
}

impl BalanceOracle {
    pub fn new(ledger: Arc<dyn LedgerConnection>) -> Self {
        Self {
            ledger,
            balance: RwLock::new(Balance::Unknown),
        }
    }

    /// Refresh the stored balance for `identity`.
    ///
    /// With no identity the result is `Unknown` and no query is issued.
    /// A failed query is logged and stored as `Unknown`; balance display
    /// is best-effort on a public test network, so the failure is never
    /// escalated to the caller.
    ///
    /// Overlapping refreshes are not coalesced: the slot is written
    /// after the ledger call resolves, so whichever refresh completes
    /// last wins, regardless of issue order.
    pub async fn refresh(&self, identity: Option<&Address>) -> Balance {
        let Some(address) = identity else {
            return Balance::Unknown;
        };

        let next = match self.ledger.get_balance(address).await {
            Ok(lamports) => {
                log::debug!("balance of {} refreshed: {} lamports", address, lamports);
                Balance::Known(lamports)
            }
            Err(e) => {
                log::warn!("balance query for {} failed: {}", address, e);
                Balance::Unknown
            }
        };

        *self.balance.write().await = next;
        next
    }

    /// Reset the stored balance to `Unknown`. Called when the connected
    /// identity changes.
    pub async fn invalidate(&self) {
        *self.balance.write().await = Balance::Unknown;
    }

    /// Last-known balance.
    pub async fn current(&self) -> Balance {
        *self.balance.read().await
    }
}
