use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::state::Mint;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, BRAIN_SUPPLY_RESERVED_BYTES, BRAIN_SUPPLY_SEED, MINT_AUTHORITY_SEED,
    },
    error::BrainError,
};

/// Supply counters for the BRAIN mint.
///
/// Every mint and burn of the token goes through this program, so
/// `total_minted - total_burned` always equals the sum of all BRAIN balances.
#[account]
pub struct BrainSupply {
    pub bump: u8,
    pub layout_version: u8,
    pub mint_authority_bump: u8,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub total_minted: u64,
    pub total_burned: u64,
    pub decimals: u8,
    pub reserved: [u8; BRAIN_SUPPLY_RESERVED_BYTES],
}

impl BrainSupply {
    pub const SPACE: usize =
        8 + 1 + 1 + 1 + 32 + 32 + 8 + 8 + 1 + BRAIN_SUPPLY_RESERVED_BYTES;

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BRAIN_SUPPLY_SEED], &crate::ID)
    }

    pub fn is_initialized(&self) -> bool {
        self.layout_version != 0
    }

    pub fn initialize(
        &mut self,
        bump: u8,
        mint_authority_bump: u8,
        authority: Pubkey,
        mint: Pubkey,
        mint_state: &Mint,
        decimals: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), BrainError::AlreadyInitialized);
        require!(mint_state.decimals == decimals, BrainError::DecimalsMismatch);
        // Counters start at zero, so the mint must not carry any supply yet.
        require!(mint_state.supply == 0, BrainError::MintNotEmpty);

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.mint_authority_bump = mint_authority_bump;
        self.authority = authority;
        self.mint = mint;
        self.total_minted = 0;
        self.total_burned = 0;
        self.decimals = decimals;
        self.reserved = [0; BRAIN_SUPPLY_RESERVED_BYTES];
        Ok(())
    }

    pub fn record_mint(&mut self, signer: Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(signer, self.authority, BrainError::Unauthorized);

        self.total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(BrainError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_burn(&mut self, balance: u64, amount: u64) -> Result<()> {
        require!(balance >= amount, BrainError::InsufficientFunds);

        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(BrainError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn circulating(&self) -> Result<u64> {
        self.total_minted
            .checked_sub(self.total_burned)
            .ok_or_else(|| error!(BrainError::SupplyUnderflow))
    }
}

pub fn mint_authority_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], &crate::ID)
}
