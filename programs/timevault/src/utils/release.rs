//! Maturity and completion checks for `execute_transfer`.

use crate::error::EscrowError;
use crate::state::{SchedulerState, TransferRecord};

/// Principal owed to the recipient if `record` may be executed at `current_block`.
pub fn releasable_amount(record: &TransferRecord, current_block: u64) -> Result<u64, EscrowError> {
    if record.is_completed {
        return Err(EscrowError::AlreadyExecuted);
    }
    if current_block < record.unlock_at_block {
        return Err(EscrowError::ExecutionTooEarly);
    }
    Ok(record.amount)
}

/// Book a completed payout: flip the record and release its principal from
/// the outstanding total. Runs after the principal has left custody.
pub fn settle(
    record: &mut TransferRecord,
    scheduler: &mut SchedulerState,
) -> Result<u64, EscrowError> {
    record.mark_completed()?;
    scheduler.settle(record.amount)?;
    Ok(record.amount)
}
