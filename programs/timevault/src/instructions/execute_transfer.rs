use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::EscrowError;
use crate::state::{registry, SchedulerState, TransferRecord};
use crate::utils::release;

/// Release the principal of transfer `id` to its recipient. Open to any signer
/// once the unlock slot is reached.
pub fn execute_transfer(ctx: Context<ExecuteTransfer>, id: u64) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let record_info = ctx.accounts.transfer.to_account_info();

    let mut record = registry::get(&record_info)?.ok_or(EscrowError::TransferNotFound)?;
    let amount = release::releasable_amount(&record, current_block)?;

    let mint = ctx.accounts.scheduler.mint;
    let scheduler_bump = ctx.accounts.scheduler.bump;
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        record.recipient,
        EscrowError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        mint,
        EscrowError::InvalidTokenMint
    );
    // The only recoverable transfer failure: a failed CPI aborts the
    // transaction with the token program's own error.
    require!(
        ctx.accounts.vault.amount >= amount,
        EscrowError::TransferFailure
    );

    // Vault authority is the scheduler PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[SchedulerState::SEED_PREFIX, &[scheduler_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.scheduler.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    release::settle(&mut record, &mut ctx.accounts.scheduler)?;
    registry::store_completed(&record_info, &record)?;

    msg!("Executed transfer {}: {} to {}", id, amount, record.recipient);
    emit!(TransferExecuted {
        id,
        recipient: record.recipient,
        amount,
        executor: ctx.accounts.executor.key(),
        executed_at_block: current_block,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ExecuteTransfer<'info> {
    #[account(
        mut,
        seeds = [SchedulerState::SEED_PREFIX],
        bump = scheduler.bump
    )]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        mut,
        seeds = [
            TransferRecord::SEED_PREFIX,
            scheduler.key().as_ref(),
            &id.to_le_bytes()
        ],
        bump
    )]
    /// CHECK: May be uninitialized; loaded through `registry::get`, which
    /// reports an empty PDA as `TransferNotFound`.
    pub transfer: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, scheduler.key().as_ref()],
        bump = scheduler.vault_bump,
        constraint = vault.mint == scheduler.mint @ EscrowError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub executor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TransferExecuted {
    pub id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub executor: Pubkey,
    pub executed_at_block: u64,
}
