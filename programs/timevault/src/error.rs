use anchor_lang::prelude::*;

/// Error codes for the time-locked escrow program.
#[error_code]
pub enum EscrowError {
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Invalid target block")]
    InvalidTargetBlock,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Transfer not found")]
    TransferNotFound,

    #[msg("Transfer already executed")]
    AlreadyExecuted,

    #[msg("Execution attempted before unlock block")]
    ExecutionTooEarly,

    #[msg("Fund transfer failed")]
    TransferFailure,

    #[msg("Invalid recipient")]
    InvalidRecipient,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Transfer id already registered")]
    DuplicateTransferId,

    #[msg("Math overflow")]
    MathOverflow,
}
