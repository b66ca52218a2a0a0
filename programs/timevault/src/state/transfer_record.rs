use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// One scheduled transfer.
/// Seeds: [b"transfer", scheduler.key(), id.to_le_bytes()]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    /// Sequential id, equal to the scheduler counter at creation.
    pub id: u64,
    /// Wallet that funded the transfer.
    pub sender: Pubkey,
    /// Wallet that receives the principal at maturity.
    pub recipient: Pubkey,
    /// Principal released to the recipient.
    pub amount: u64,
    /// Service fee withheld on top of `amount` at creation.
    pub fee_paid: u64,
    /// First slot at which the transfer may be executed.
    pub unlock_at_block: u64,
    /// Flips to true exactly once, on execution.
    pub is_completed: bool,
    pub bump: u8,
}

impl TransferRecord {
    pub const SIZE: usize =
        8 +  // id
        32 + // sender
        32 + // recipient
        8 +  // amount
        8 +  // fee_paid
        8 +  // unlock_at_block
        1 +  // is_completed
        1;   // bump

    pub const SEED_PREFIX: &'static [u8] = b"transfer";

    /// Total withheld from the sender for this record.
    pub fn locked_total(&self) -> Result<u64, EscrowError> {
        self.amount
            .checked_add(self.fee_paid)
            .ok_or(EscrowError::MathOverflow)
    }

    pub fn mark_completed(&mut self) -> Result<(), EscrowError> {
        if self.is_completed {
            return Err(EscrowError::AlreadyExecuted);
        }
        self.is_completed = true;
        Ok(())
    }
}
