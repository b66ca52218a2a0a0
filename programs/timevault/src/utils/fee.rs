//! Service fee arithmetic. Integer only, truncating toward zero.

use crate::constants::{BPS_DENOMINATOR, SERVICE_FEE_BPS};
use crate::error::EscrowError;

/// `floor(amount * SERVICE_FEE_BPS / BPS_DENOMINATOR)`, computed in u128.
pub fn service_fee(amount: u64) -> Result<u64, EscrowError> {
    let fee = (amount as u128)
        .checked_mul(SERVICE_FEE_BPS as u128)
        .ok_or(EscrowError::InsufficientBalance)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(fee).map_err(|_| EscrowError::InsufficientBalance)
}

/// Principal plus fee, the amount withheld from the sender.
pub fn total_with_fee(amount: u64) -> Result<(u64, u64), EscrowError> {
    let fee = service_fee(amount)?;
    let total = amount
        .checked_add(fee)
        .ok_or(EscrowError::InsufficientBalance)?;
    Ok((fee, total))
}
