use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Singleton scheduler PDA: configuration plus the transfer id counter.
#[account]
#[derive(Default, Debug)]
pub struct SchedulerState {
    /// Administrative authority, recorded at initialization.
    pub admin: Pubkey,
    /// The single asset held in escrow.
    pub mint: Pubkey,
    /// Custodial token account (PDA, authority = this account).
    pub vault: Pubkey,
    /// Id the next scheduled transfer will receive.
    pub next_transfer_id: u64,
    /// Principal ever scheduled, completed or not.
    pub total_scheduled: u64,
    /// Principal of transfers not yet executed. The vault never holds less.
    pub outstanding_principal: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl SchedulerState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        8 +  // next_transfer_id
        8 +  // total_scheduled
        8 +  // outstanding_principal
        1 +  // bump
        1;   // vault_bump

    pub const SEED_PREFIX: &'static [u8] = b"scheduler";

    /// Consume `id` from the counter and account for its locked principal.
    ///
    /// The record PDA is derived from `next_transfer_id`, so `id` must be the
    /// current counter value; anything else means the record was written
    /// under a stale id.
    pub fn admit(&mut self, id: u64, amount: u64) -> Result<(), EscrowError> {
        if id != self.next_transfer_id {
            return Err(EscrowError::DuplicateTransferId);
        }
        let next_transfer_id = self
            .next_transfer_id
            .checked_add(1)
            .ok_or(EscrowError::MathOverflow)?;
        let total_scheduled = self
            .total_scheduled
            .checked_add(amount)
            .ok_or(EscrowError::MathOverflow)?;
        let outstanding_principal = self
            .outstanding_principal
            .checked_add(amount)
            .ok_or(EscrowError::MathOverflow)?;

        self.next_transfer_id = next_transfer_id;
        self.total_scheduled = total_scheduled;
        self.outstanding_principal = outstanding_principal;
        Ok(())
    }

    /// Release `amount` of principal from the outstanding total.
    pub fn settle(&mut self, amount: u64) -> Result<(), EscrowError> {
        self.outstanding_principal = self
            .outstanding_principal
            .checked_sub(amount)
            .ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }
}
