pub mod initialize;
pub mod schedule_transfer;
pub mod execute_transfer;
pub mod queries;

pub use initialize::*;
pub use schedule_transfer::*;
pub use execute_transfer::*;
pub use queries::*;
