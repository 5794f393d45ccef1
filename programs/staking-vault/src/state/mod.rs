use anchor_lang::prelude::*;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, STAKE_RECEIPT_RESERVED_BYTES, STAKE_SEED, VAULT_RESERVED_BYTES,
        VAULT_SEED, VAULT_SOL_SEED,
    },
    error::VaultError,
};

#[account]
pub struct Vault {
    pub bump: u8,
    pub layout_version: u8,
    pub authority: Pubkey,
    pub total_sol_deposited: u64,
    pub total_sol_withdrawn: u64,
    pub lst_delegated: u64,
    pub brain_yield_distributed: u64,
    pub staker_count: u32,
    pub reserved: [u8; VAULT_RESERVED_BYTES],
}

impl Vault {
    pub const SPACE: usize = 8 + 1 + 1 + 32 + 8 + 8 + 8 + 8 + 4 + VAULT_RESERVED_BYTES;

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED], &crate::ID)
    }

    pub fn sol_address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SOL_SEED], &crate::ID)
    }

    pub fn is_initialized(&self) -> bool {
        self.layout_version != 0
    }

    pub fn initialize(&mut self, bump: u8, authority: Pubkey) -> Result<()> {
        require!(!self.is_initialized(), VaultError::AlreadyInitialized);

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.authority = authority;
        self.total_sol_deposited = 0;
        self.total_sol_withdrawn = 0;
        self.lst_delegated = 0;
        self.brain_yield_distributed = 0;
        self.staker_count = 0;
        self.reserved = [0; VAULT_RESERVED_BYTES];
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64, new_staker: bool) -> Result<()> {
        if new_staker {
            self.staker_count = self
                .staker_count
                .checked_add(1)
                .ok_or(VaultError::ArithmeticOverflow)?;
        }
        self.total_sol_deposited = self
            .total_sol_deposited
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        Ok(())
    }

    /// `vault_sol` is a data-less system account, so the first deposit has to
    /// cover the rent-exempt minimum for zero bytes on its own.
    pub fn check_sol_rent_exempt(balance: u64, amount: u64, rent_minimum: u64) -> Result<()> {
        let after = balance
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        require!(after >= rent_minimum, VaultError::BelowRentExemptMinimum);
        Ok(())
    }

    pub fn record_lst_delegation(&mut self, amount: u64) -> Result<()> {
        self.lst_delegated = self
            .lst_delegated
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_brain_yield(&mut self, amount: u64) -> Result<()> {
        self.brain_yield_distributed = self
            .brain_yield_distributed
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[account]
pub struct StakeReceipt {
    pub bump: u8,
    pub layout_version: u8,
    pub staker: Pubkey,
    pub sol_deposited: u64,
    pub lst_share: u64,
    pub brain_claimed: u64,
    pub deposit_ts: i64,
    pub reserved: [u8; STAKE_RECEIPT_RESERVED_BYTES],
}

impl StakeReceipt {
    pub const SPACE: usize = 8 + 1 + 1 + 32 + 8 + 8 + 8 + 8 + STAKE_RECEIPT_RESERVED_BYTES;

    pub fn address(staker: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[STAKE_SEED, staker.as_ref()], &crate::ID)
    }

    /// Adds `amount` to the receipt, opening it on the first stake. Returns
    /// whether this was the staker's first deposit.
    pub fn record_stake(&mut self, bump: u8, staker: Pubkey, amount: u64, now: i64) -> Result<bool> {
        require!(amount > 0, VaultError::ZeroAmount);

        if self.layout_version != 0 {
            self.sol_deposited = self
                .sol_deposited
                .checked_add(amount)
                .ok_or(VaultError::ArithmeticOverflow)?;
            return Ok(false);
        }

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.staker = staker;
        self.sol_deposited = amount;
        self.lst_share = 0;
        self.brain_claimed = 0;
        self.deposit_ts = now;
        self.reserved = [0; STAKE_RECEIPT_RESERVED_BYTES];
        Ok(true)
    }
}
