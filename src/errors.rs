use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Stream interval must be greater than zero")]
    InvalidInterval,
    #[msg("Overflow")]
    Overflow,
    #[msg("Account data is too small")]
    AccountDataTooSmall,
    #[msg("Account discriminator does not match")]
    DiscriminatorMismatch,
    #[msg("Invalid account data")]
    InvalidAccountData,
}
