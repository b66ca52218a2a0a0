//! Validation and arithmetic for a new scheduled transfer.
//!
//! Everything that can reject a `schedule_transfer` call is decided by
//! `Admission::plan`, before any token transfer; `Admission::commit` applies
//! the result once the funds are in custody.

use anchor_lang::prelude::Pubkey;

use crate::constants::MIN_BLOCKS_BEFORE_EXECUTION;
use crate::error::EscrowError;
use crate::state::{FeeLedger, SchedulerState, TransferRecord};
use crate::utils::fee;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Admission {
    pub amount: u64,
    pub fee_amount: u64,
    /// `amount + fee_amount`, moved from the sender into custody.
    pub total_amount: u64,
    pub unlock_at_block: u64,
}

impl Admission {
    pub fn plan(
        amount: u64,
        delay_blocks: u64,
        current_block: u64,
        sender_balance: u64,
    ) -> Result<Self, EscrowError> {
        if amount == 0 {
            return Err(EscrowError::InsufficientBalance);
        }
        let unlock_at_block = unlock_height(current_block, delay_blocks)?;
        let (fee_amount, total_amount) = fee::total_with_fee(amount)?;
        if sender_balance < total_amount {
            return Err(EscrowError::InsufficientBalance);
        }
        Ok(Self {
            amount,
            fee_amount,
            total_amount,
            unlock_at_block,
        })
    }

    /// Apply an admitted transfer to the counter and fee ledger, returning the
    /// record to store under `id`. Runs after the sender's funds are in custody.
    ///
    /// On error the caller's unit of work must be discarded; the instruction
    /// rollback does this on-chain.
    pub fn commit(
        &self,
        scheduler: &mut SchedulerState,
        fee_ledger: &mut FeeLedger,
        id: u64,
        sender: Pubkey,
        recipient: Pubkey,
        bump: u8,
    ) -> Result<TransferRecord, EscrowError> {
        scheduler.admit(id, self.amount)?;
        fee_ledger.accrue(self.fee_amount)?;
        Ok(TransferRecord {
            id,
            sender,
            recipient,
            amount: self.amount,
            fee_paid: self.fee_amount,
            unlock_at_block: self.unlock_at_block,
            is_completed: false,
            bump,
        })
    }
}

/// `current_block + delay_blocks`, rejecting short delays and overflow.
pub fn unlock_height(current_block: u64, delay_blocks: u64) -> Result<u64, EscrowError> {
    if delay_blocks < MIN_BLOCKS_BEFORE_EXECUTION {
        return Err(EscrowError::InvalidTargetBlock);
    }
    current_block
        .checked_add(delay_blocks)
        .ok_or(EscrowError::InvalidTargetBlock)
}
