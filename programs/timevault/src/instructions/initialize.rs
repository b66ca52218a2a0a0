use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::state::{FeeLedger, SchedulerState};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let st = &mut ctx.accounts.scheduler;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.next_transfer_id = 0;
    st.total_scheduled = 0;
    st.outstanding_principal = 0;
    st.bump = ctx.bumps.scheduler;
    st.vault_bump = ctx.bumps.vault;

    let ledger = &mut ctx.accounts.fee_ledger;
    ledger.total_fees = 0;
    ledger.bump = ctx.bumps.fee_ledger;

    msg!("Scheduler initialized for mint {}", st.mint);
    emit!(SchedulerInitialized {
        admin: st.admin,
        mint: st.mint,
        vault: st.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + SchedulerState::SIZE,
        seeds = [SchedulerState::SEED_PREFIX],
        bump
    )]
    pub scheduler: Account<'info, SchedulerState>,

    #[account(
        init,
        payer = admin,
        space = 8 + FeeLedger::SIZE,
        seeds = [FeeLedger::SEED_PREFIX, scheduler.key().as_ref()],
        bump
    )]
    pub fee_ledger: Account<'info, FeeLedger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = scheduler,
        seeds = [VAULT_SEED, scheduler.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SchedulerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
