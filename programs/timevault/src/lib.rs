use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("EYvcJQ8xMVvnxgjrrhB2KJqTmduuGCs2CKYAWzM1MVui");

#[program]
pub mod timevault {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn schedule_transfer(
        ctx: Context<ScheduleTransfer>,
        recipient: Pubkey,
        amount: u64,
        delay_blocks: u64,
    ) -> Result<u64> {
        instructions::schedule_transfer::schedule_transfer(ctx, recipient, amount, delay_blocks)
    }

    pub fn execute_transfer(ctx: Context<ExecuteTransfer>, id: u64) -> Result<()> {
        instructions::execute_transfer::execute_transfer(ctx, id)
    }

    pub fn get_transfer(ctx: Context<GetTransfer>, id: u64) -> Result<TransferRecord> {
        instructions::queries::get_transfer(ctx, id)
    }

    pub fn get_transfer_counter(ctx: Context<ReadScheduler>) -> Result<u64> {
        instructions::queries::get_transfer_counter(ctx)
    }

    pub fn get_accumulated_fees(ctx: Context<ReadScheduler>) -> Result<u64> {
        instructions::queries::get_accumulated_fees(ctx)
    }

    pub fn emit_scheduler_stats(ctx: Context<ReadSchedulerStats>) -> Result<()> {
        instructions::queries::emit_scheduler_stats(ctx)
    }
}
