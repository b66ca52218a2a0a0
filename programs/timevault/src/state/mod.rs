pub mod fee_ledger;
pub mod registry;
pub mod scheduler_state;
pub mod transfer_record;

pub use fee_ledger::*;
pub use scheduler_state::*;
pub use transfer_record::*;
