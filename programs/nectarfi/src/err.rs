use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    NoZeroTokens,
    #[msg("User token balance is insufficient")]
    InsufficientBalance,
    #[msg("Share supply is zero, nothing to redeem against")]
    NoShareSupply,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid account input")]
    InvalidAccountInput,
    #[msg("Yield registry returned no quotes")]
    NoYieldData,
}

pub fn acc(info: &str) -> VaultError {
    msg!(info);
    VaultError::InvalidAccountInput
}
