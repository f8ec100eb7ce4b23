//! Transfer validation
//!
//! Pure decision function over the request, the connected identity, and
//! the last-known balance. No side effects.

use crate::core::amount;
use crate::shared::error::TransferError;
use crate::shared::types::{Address, Balance, TransferRequest, ValidatedTransfer};
use std::str::FromStr;

/// Validate a transfer request.
///
/// Checks run in order and the first failure wins:
/// 1. a wallet must be connected;
/// 2. the recipient must be a well-formed address;
/// 3. the amount must parse as a positive decimal (amounts that
///    truncate to zero lamports count as invalid);
/// 4. the last-known balance must cover the amount — an unknown
///    balance fails closed as insufficient.
///
/// Equal-to-balance transfers are allowed.
pub fn validate(
    request: &TransferRequest,
    identity: Option<&Address>,
    balance: Balance,
) -> Result<ValidatedTransfer, TransferError> {
    if identity.is_none() {
        return Err(TransferError::NoWalletConnected);
    }

    let recipient = Address::from_str(request.recipient.trim())?;

    let lamports = amount::sol_to_lamports(&request.amount)?;
    if lamports == 0 {
        return Err(TransferError::invalid_amount(
            "amount must be greater than zero",
        ));
    }

    if !balance.covers(lamports) {
        return Err(TransferError::InsufficientBalance);
    }

    Ok(ValidatedTransfer::new(recipient, lamports))
}
