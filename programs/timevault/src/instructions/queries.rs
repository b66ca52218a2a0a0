//! Read-only surface for dashboards and indexers. Nothing here is writable.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::EscrowError;
use crate::state::{registry, FeeLedger, SchedulerState, TransferRecord};

pub fn get_transfer(ctx: Context<GetTransfer>, id: u64) -> Result<TransferRecord> {
    let record = registry::get(&ctx.accounts.transfer.to_account_info())?
        .ok_or(EscrowError::TransferNotFound)?;
    require!(record.id == id, EscrowError::TransferNotFound);
    Ok(record)
}

pub fn get_transfer_counter(ctx: Context<ReadScheduler>) -> Result<u64> {
    Ok(ctx.accounts.scheduler.next_transfer_id)
}

pub fn get_accumulated_fees(ctx: Context<ReadScheduler>) -> Result<u64> {
    Ok(ctx.accounts.fee_ledger.total_fees)
}

pub fn emit_scheduler_stats(ctx: Context<ReadSchedulerStats>) -> Result<()> {
    let st = &ctx.accounts.scheduler;
    emit!(SchedulerStats {
        next_transfer_id: st.next_transfer_id,
        total_scheduled: st.total_scheduled,
        outstanding_principal: st.outstanding_principal,
        total_fees: ctx.accounts.fee_ledger.total_fees,
        vault_balance: ctx.accounts.vault.amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct GetTransfer<'info> {
    #[account(seeds = [SchedulerState::SEED_PREFIX], bump = scheduler.bump)]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        seeds = [
            TransferRecord::SEED_PREFIX,
            scheduler.key().as_ref(),
            &id.to_le_bytes()
        ],
        bump
    )]
    /// CHECK: May be uninitialized; see `registry::get`.
    pub transfer: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadScheduler<'info> {
    #[account(seeds = [SchedulerState::SEED_PREFIX], bump = scheduler.bump)]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        seeds = [FeeLedger::SEED_PREFIX, scheduler.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Account<'info, FeeLedger>,
}

#[derive(Accounts)]
pub struct ReadSchedulerStats<'info> {
    #[account(seeds = [SchedulerState::SEED_PREFIX], bump = scheduler.bump)]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        seeds = [FeeLedger::SEED_PREFIX, scheduler.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Account<'info, FeeLedger>,

    #[account(address = scheduler.vault @ EscrowError::InvalidTokenAccount)]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct SchedulerStats {
    pub next_transfer_id: u64,
    pub total_scheduled: u64,
    pub outstanding_principal: u64,
    pub total_fees: u64,
    pub vault_balance: u64,
}
