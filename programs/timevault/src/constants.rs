//! Protocol constants.

/// Service fee charged at scheduling time, in basis points (5%).
pub const SERVICE_FEE_BPS: u64 = 500;

/// 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Smallest accepted `delay_blocks` for a new transfer.
pub const MIN_BLOCKS_BEFORE_EXECUTION: u64 = 1;

/// Seed for the custodial token account owned by the scheduler PDA.
pub const VAULT_SEED: &[u8] = b"vault";
