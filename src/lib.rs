//! SolPay Transfer Core
//!
//! Transfer orchestration core for SolPay.
//! Validates, builds, submits, and confirms a single native-token (SOL)
//! transfer on a public test network (Solana devnet).
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on one flow:
//!
//! - **Core**: amount conversion, balance oracle, validation, submission
//! - **Domain**: collaborator interfaces (wallet capability, ledger connection)
//! - **Shared**: common types, constants, and errors
//! - **Infrastructure**: JSON-RPC ledger connection
//!
//! Wallet key management and signing live entirely behind
//! [`WalletCapability`]; this crate never touches private keys. The UI
//! layer is a caller, not a component: it invokes `refresh_balance` on
//! identity change and `validate`/`submit` on a transfer request, and
//! renders the typed results however it likes.
//!
//! ## Usage
//!
//! ```ignore
//! use solpay_transfer_core::{init_transfer_core, TransferRequest};
//!
//! solpay_transfer_core::init();
//! let core = init_transfer_core(wallet);
//!
//! core.refresh_balance().await;
//! let outcome = core
//!     .transfer(&TransferRequest {
//!         recipient: "So11111111111111111111111111111111111111112".to_string(),
//!         amount: "1.5".to_string(),
//!     })
//!     .await?;
//! println!("signature: {:?}", outcome.signature());
//! ```
//!
//! Callers are responsible for disabling re-submission UI while an
//! attempt is in flight; the core does not enforce one-in-flight-at-a-time.

use dotenv::dotenv;
use std::env;
use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use crate::core::balance::BalanceOracle;
pub use crate::core::submitter::TransferSubmitter;
pub use crate::domain::collaborators::{LedgerConnection, WalletCapability};
pub use crate::infrastructure::rpc::HttpLedgerConnection;
pub use crate::shared::error::TransferError;
pub use crate::shared::types::{
    Address, Balance, CommitmentLevel, SubmissionId, TransferInstruction, TransferOutcome,
    TransferRequest, TransferStage, ValidatedTransfer,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging and load `.env` if present. Safe to call more
/// than once.
pub fn init() {
    dotenv().ok();
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Build a transfer core wired to a JSON-RPC ledger connection, reading
/// the endpoint from `SOLPAY_RPC_URL` or falling back to devnet.
pub fn init_transfer_core(wallet: Arc<dyn WalletCapability>) -> TransferCore {
    dotenv().ok();
    let rpc_url = env::var(shared::constants::ENV_RPC_URL)
        .unwrap_or_else(|_| shared::constants::DEVNET_RPC_URL.to_string());
    log::info!("transfer core using RPC endpoint {}", rpc_url);
    let ledger: Arc<dyn LedgerConnection> = Arc::new(HttpLedgerConnection::new(rpc_url));
    TransferCore::new(wallet, ledger)
}

/// Main transfer core struct exposing the flow to the UI layer
pub struct TransferCore {
    wallet: Arc<dyn WalletCapability>,
    oracle: BalanceOracle,
    submitter: TransferSubmitter,
}

impl TransferCore {
    pub fn new(wallet: Arc<dyn WalletCapability>, ledger: Arc<dyn LedgerConnection>) -> Self {
        Self {
            oracle: BalanceOracle::new(Arc::clone(&ledger)),
            submitter: TransferSubmitter::new(Arc::clone(&wallet), ledger),
            wallet,
        }
    }

    /// The connected account, if any. Owned by the wallet capability;
    /// the core only reads it.
    pub fn identity(&self) -> Option<Address> {
        self.wallet.identity()
    }

    /// Last-known balance.
    pub async fn balance(&self) -> Balance {
        self.oracle.current().await
    }

    /// Query the ledger for the connected account's balance. With no
    /// wallet connected this is `Unknown` and no query is made.
    pub async fn refresh_balance(&self) -> Balance {
        self.oracle.refresh(self.wallet.identity().as_ref()).await
    }

    /// Reset the stored balance to `Unknown`. Call on identity change.
    pub async fn invalidate_balance(&self) {
        self.oracle.invalidate().await;
    }

    /// Validate a transfer request against the connected identity and
    /// the last-known balance.
    pub async fn validate(
        &self,
        request: &TransferRequest,
    ) -> Result<ValidatedTransfer, TransferError> {
        crate::core::validator::validate(
            request,
            self.wallet.identity().as_ref(),
            self.oracle.current().await,
        )
    }

    /// Submit a validated transfer and await confirmation.
    pub async fn submit(&self, transfer: &ValidatedTransfer) -> TransferOutcome {
        match self.wallet.identity() {
            Some(identity) => self.submitter.submit(transfer, &identity).await,
            None => TransferOutcome::Failed {
                stage: TransferStage::Building,
                error: TransferError::NoWalletConnected,
            },
        }
    }

    /// Run the whole flow: validate, then submit.
    ///
    /// Validation failures come back as `Err` (recoverable by
    /// correcting input); submission outcomes, confirmed or failed,
    /// come back as `Ok`.
    pub async fn transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, TransferError> {
        let validated = self.validate(request).await?;
        Ok(self.submit(&validated).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collaborators::{MockLedgerConnection, MockWalletCapability};

    const SENDER: &str = "11111111111111111111111111111111";
    const RECIPIENT: &str = "So11111111111111111111111111111111111111112";
    const SIGNATURE: &str = "5j7s6NiJS3JAkvgkoc18WVAsiSaci2pxB2A6ueCJP4tprA2TFg9wSyTLeYouxPBJEMzJinENTkpA52YStRW5Dia7";

    fn connected_wallet() -> MockWalletCapability {
        let mut wallet = MockWalletCapability::new();
        let identity: Address = SENDER.parse().expect("valid address");
        wallet.expect_identity().return_const(Some(identity));
        wallet
    }

    fn request(amount: &str) -> TransferRequest {
        TransferRequest {
            recipient: RECIPIENT.to_string(),
            amount: amount.to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_flow_refresh_validate_submit() {
        let mut wallet = connected_wallet();
        wallet
            .expect_sign_and_send()
            .times(1)
            .returning(|_| Ok(SIGNATURE.to_string()));

        let mut ledger = MockLedgerConnection::new();
        ledger
            .expect_get_balance()
            .times(1)
            .returning(|_| Ok(2_000_000_000));
        ledger
            .expect_confirm_transaction()
            .times(1)
            .returning(|_, _| Ok(()));

        let core = TransferCore::new(Arc::new(wallet), Arc::new(ledger));

        assert_eq!(core.balance().await, Balance::Unknown);
        assert_eq!(core.refresh_balance().await, Balance::Known(2_000_000_000));

        let outcome = core
            .transfer(&request("1.5"))
            .await
            .expect("request is valid");
        assert_eq!(outcome.signature(), Some(SIGNATURE));
    }

    #[tokio::test]
    async fn test_transfer_with_unknown_balance_fails_closed() {
        let mut wallet = connected_wallet();
        wallet.expect_sign_and_send().times(0);

        let mut ledger = MockLedgerConnection::new();
        ledger.expect_confirm_transaction().times(0);

        let core = TransferCore::new(Arc::new(wallet), Arc::new(ledger));
        // Balance never refreshed: validation must refuse to submit
        let error = core.transfer(&request("1.5")).await.unwrap_err();
        assert_eq!(error, TransferError::InsufficientBalance);
    }

    #[tokio::test]
    async fn test_transfer_without_wallet() {
        let mut wallet = MockWalletCapability::new();
        wallet.expect_identity().return_const(None::<Address>);
        wallet.expect_sign_and_send().times(0);

        let core = TransferCore::new(Arc::new(wallet), Arc::new(MockLedgerConnection::new()));
        let error = core.transfer(&request("1.5")).await.unwrap_err();
        assert_eq!(error, TransferError::NoWalletConnected);
    }

    #[tokio::test]
    async fn test_refresh_without_wallet_makes_no_query() {
        let mut wallet = MockWalletCapability::new();
        wallet.expect_identity().return_const(None::<Address>);

        let mut ledger = MockLedgerConnection::new();
        ledger.expect_get_balance().times(0);

        let core = TransferCore::new(Arc::new(wallet), Arc::new(ledger));
        assert_eq!(core.refresh_balance().await, Balance::Unknown);
    }

    #[tokio::test]
    async fn test_invalidate_balance_on_identity_change() {
        let wallet = connected_wallet();
        let mut ledger = MockLedgerConnection::new();
        ledger
            .expect_get_balance()
            .returning(|_| Ok(1_000_000_000));

        let core = TransferCore::new(Arc::new(wallet), Arc::new(ledger));
        core.refresh_balance().await;
        assert!(core.balance().await.is_known());

        core.invalidate_balance().await;
        assert_eq!(core.balance().await, Balance::Unknown);
    }

    #[tokio::test]
    async fn test_submission_failure_surfaces_in_outcome() {
        let mut wallet = connected_wallet();
        wallet
            .expect_sign_and_send()
            .times(1)
            .returning(|_| Err(TransferError::signing_or_broadcast("User rejected the request")));

        let mut ledger = MockLedgerConnection::new();
        ledger
            .expect_get_balance()
            .returning(|_| Ok(2_000_000_000));
        ledger.expect_confirm_transaction().times(0);

        let core = TransferCore::new(Arc::new(wallet), Arc::new(ledger));
        core.refresh_balance().await;

        let outcome = core
            .transfer(&request("1.5"))
            .await
            .expect("validation passes");
        assert!(!outcome.is_confirmed());
        assert!(matches!(
            outcome.error(),
            Some(TransferError::SigningOrBroadcast(_))
        ));
    }
}
