//! Transfer submission
//!
//! Drives one submission attempt through its stages:
//! Building -> Submitted -> Confirming -> Confirmed, or Failed at any
//! transition. No stage is retried; a caller wanting a retry must
//! re-validate and re-run the whole flow, since the balance may have
//! changed underneath the original instruction.

use crate::domain::collaborators::{LedgerConnection, WalletCapability};
use crate::shared::constants::CONFIRMATION_COMMITMENT;
use crate::shared::error::TransferError;
use crate::shared::types::{
    Address, TransferInstruction, TransferOutcome, TransferStage, ValidatedTransfer,
};
use std::sync::Arc;

/// Transfer submitter for a single validated transfer
pub struct TransferSubmitter {
    wallet: Arc<dyn WalletCapability>,
    ledger: Arc<dyn LedgerConnection>,
}

impl TransferSubmitter {
    pub fn new(wallet: Arc<dyn WalletCapability>, ledger: Arc<dyn LedgerConnection>) -> Self {
        Self { wallet, ledger }
    }

    /// Submit a validated transfer from `identity` and await
    /// confirmation at the confirmed commitment level.
    ///
    /// Confirmation is only attempted after the wallet's sign-and-send
    /// resolves. Signing/broadcast failures and confirmation failures
    /// come back as distinct errors, each carrying the collaborator's
    /// message verbatim, so callers can tell "never signed" from
    /// "signed but not confirmed".
    pub async fn submit(
        &self,
        transfer: &ValidatedTransfer,
        identity: &Address,
    ) -> TransferOutcome {
        // Building: one instruction, sender pays the fee
        let instruction = TransferInstruction {
            from: identity.clone(),
            to: transfer.recipient().clone(),
            lamports: transfer.lamports(),
        };
        log::debug!(
            "built transfer instruction: {} lamports from {} to {}",
            instruction.lamports,
            instruction.from,
            instruction.to
        );

        // Submitted: the wallet authorizes and broadcasts
        let signature = match self.wallet.sign_and_send(&instruction).await {
            Ok(signature) => signature,
            Err(e) => {
                let error = match e {
                    TransferError::SigningOrBroadcast(_) => e,
                    other => TransferError::signing_or_broadcast(other.to_string()),
                };
                log::warn!("transfer submission failed: {}", error);
                return TransferOutcome::Failed {
                    stage: TransferStage::Submitted,
                    error,
                };
            }
        };
        log::info!("transfer submitted, signature {}", signature);

        // Confirming: irrevocable from here on, even if this await is
        // abandoned
        if let Err(e) = self
            .ledger
            .confirm_transaction(&signature, CONFIRMATION_COMMITMENT)
            .await
        {
            let error = match e {
                TransferError::Confirmation(_) => e,
                other => TransferError::confirmation(other.to_string()),
            };
            log::warn!("transfer {} not confirmed: {}", signature, error);
            return TransferOutcome::Failed {
                stage: TransferStage::Confirming,
                error,
            };
        }

        log::info!("transfer {} confirmed", signature);
        TransferOutcome::Confirmed { signature }
    }
}
