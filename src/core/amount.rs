//! Amount conversion between SOL and lamports
//!
//! Conversions are exact: decimal strings are parsed digit by digit
//! rather than through floating point, and digits past the ledger's
//! nine decimal places are truncated, never rounded up. Truncation
//! means a conversion can only ever spend less than what was typed.

use crate::shared::constants::{LAMPORTS_PER_SOL, SOL_DECIMALS};
use crate::shared::error::TransferError;

/// Convert a decimal SOL amount to lamports.
///
/// Accepts plain non-negative decimal strings ("1", "1.5", ".5", "2.").
/// Rejects anything else: signs, exponents, multiple decimal points,
/// non-digit characters, or values that overflow `u64`.
pub fn sol_to_lamports(amount: &str) -> Result<u64, TransferError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(TransferError::invalid_amount("amount cannot be empty"));
    }

    let (whole, frac) = match amount.split_once('.') {
        None => (amount, ""),
        Some((whole, frac)) => {
            if frac.contains('.') {
                return Err(TransferError::invalid_amount(
                    "amount has more than one decimal point",
                ));
            }
            (whole, frac)
        }
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(TransferError::invalid_amount("amount has no digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(TransferError::invalid_amount(
            "amount must be a non-negative decimal number",
        ));
    }

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| TransferError::invalid_amount("amount too large"))?
    };

    // Truncate fractional digits past the display precision, then pad
    // to a full lamport count.
    let mut frac_digits = frac.to_string();
    frac_digits.truncate(SOL_DECIMALS);
    while frac_digits.len() < SOL_DECIMALS {
        frac_digits.push('0');
    }
    let frac_value: u128 = frac_digits
        .parse()
        .map_err(|_| TransferError::invalid_amount("invalid fractional digits"))?;

    let lamports = whole_value
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| TransferError::invalid_amount("amount too large"))?;

    u64::try_from(lamports).map_err(|_| TransferError::invalid_amount("amount too large"))
}

/// Format a lamport amount as a decimal SOL string with full precision.
pub fn lamports_to_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    format!("{}.{:09}", whole, frac)
}

/// Approximate SOL value for display purposes only. Exact for balances
/// below 2^53 lamports; never used for sufficiency checks.
pub fn lamports_to_sol_f64(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
