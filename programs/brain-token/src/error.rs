use anchor_lang::prelude::*;

#[error_code]
pub enum BrainError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("BRAIN supply is already initialized")]
    AlreadyInitialized,
    #[msg("Mint authority must be the program's mint authority PDA")]
    InvalidMintAuthority,
    #[msg("Requested decimals do not match the mint")]
    DecimalsMismatch,
    #[msg("Mint already has tokens in circulation")]
    MintNotEmpty,
    #[msg("Token account or mint does not match the BRAIN mint")]
    MintMismatch,
    #[msg("Insufficient BRAIN balance")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("More BRAIN burned than minted")]
    SupplyUnderflow,
}
