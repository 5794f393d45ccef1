use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Vault is already initialized")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Deposit would leave the vault SOL account below the rent-exempt minimum")]
    BelowRentExemptMinimum,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
