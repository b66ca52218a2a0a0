use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Running total of service fees collected by `schedule_transfer`.
#[account]
#[derive(Default, Debug)]
pub struct FeeLedger {
    pub total_fees: u64,
    pub bump: u8,
}

impl FeeLedger {
    pub const SIZE: usize = 8 + 1;

    pub const SEED_PREFIX: &'static [u8] = b"fee_ledger";

    pub fn accrue(&mut self, amount: u64) -> Result<(), EscrowError> {
        self.total_fees = self
            .total_fees
            .checked_add(amount)
            .ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrue_is_cumulative() {
        let mut ledger = FeeLedger::default();
        ledger.accrue(50).unwrap();
        ledger.accrue(0).unwrap();
        ledger.accrue(7).unwrap();
        assert_eq!(ledger.total_fees, 57);
    }

    #[test]
    fn accrue_overflow_keeps_total() {
        let mut ledger = FeeLedger {
            total_fees: u64::MAX - 1,
            bump: 0,
        };
        assert!(matches!(ledger.accrue(2), Err(EscrowError::MathOverflow)));
        assert_eq!(ledger.total_fees, u64::MAX - 1);
    }
}
