use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::EscrowError;
use crate::state::{FeeLedger, SchedulerState, TransferRecord};
use crate::utils::admission::Admission;

/// Lock `amount` plus the service fee in the vault, releasable to `recipient`
/// `delay_blocks` slots from now. Returns the new transfer id.
pub fn schedule_transfer(
    ctx: Context<ScheduleTransfer>,
    recipient: Pubkey,
    amount: u64,
    delay_blocks: u64,
) -> Result<u64> {
    let current_block = Clock::get()?.slot;
    let new_id = ctx.accounts.scheduler.next_transfer_id;

    // All rejections happen here, before any token transfer.
    let admission = Admission::plan(
        amount,
        delay_blocks,
        current_block,
        ctx.accounts.sender_token_account.amount,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.sender_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.sender.to_account_info(),
            },
        ),
        admission.total_amount,
    )?;

    let record = admission.commit(
        &mut ctx.accounts.scheduler,
        &mut ctx.accounts.fee_ledger,
        new_id,
        ctx.accounts.sender.key(),
        recipient,
        ctx.bumps.transfer,
    )?;
    let locked_total = record.locked_total()?;
    require!(
        locked_total == admission.total_amount,
        EscrowError::TransferFailure
    );

    msg!(
        "Scheduled transfer {}: {} (+{} fee) unlocks at {}",
        new_id,
        record.amount,
        record.fee_paid,
        record.unlock_at_block
    );
    emit!(TransferScheduled {
        id: new_id,
        sender: record.sender,
        recipient,
        amount: record.amount,
        fee_paid: record.fee_paid,
        locked_total,
        unlock_at_block: record.unlock_at_block,
        scheduled_at_block: current_block,
    });
    ctx.accounts.transfer.set_inner(record);

    Ok(new_id)
}

#[derive(Accounts)]
pub struct ScheduleTransfer<'info> {
    #[account(
        mut,
        seeds = [SchedulerState::SEED_PREFIX],
        bump = scheduler.bump
    )]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        mut,
        seeds = [FeeLedger::SEED_PREFIX, scheduler.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Account<'info, FeeLedger>,

    // Derived from the counter: a second call racing for the same id fails on init.
    #[account(
        init,
        payer = sender,
        space = 8 + TransferRecord::SIZE,
        seeds = [
            TransferRecord::SEED_PREFIX,
            scheduler.key().as_ref(),
            &scheduler.next_transfer_id.to_le_bytes()
        ],
        bump
    )]
    pub transfer: Account<'info, TransferRecord>,

    #[account(
        mut,
        seeds = [VAULT_SEED, scheduler.key().as_ref()],
        bump = scheduler.vault_bump,
        constraint = vault.mint == scheduler.mint @ EscrowError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = sender_token_account.mint == scheduler.mint @ EscrowError::InvalidTokenMint,
        constraint = sender_token_account.owner == sender.key() @ EscrowError::InvalidTokenAccount,
    )]
    pub sender_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransferScheduled {
    pub id: u64,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub fee_paid: u64,
    /// `amount + fee_paid`, moved from the sender into the vault.
    pub locked_total: u64,
    pub unlock_at_block: u64,
    pub scheduled_at_block: u64,
}
