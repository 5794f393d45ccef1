use anchor_lang::prelude::*;

use crate::{constants::VAULT_SEED, events::VaultInitialized, state::Vault};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init_if_needed,
        payer = authority,
        space = Vault::SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.initialize(ctx.bumps.vault, ctx.accounts.authority.key())?;

    msg!("Staking vault initialized");
    emit!(VaultInitialized {
        vault: vault.key(),
        authority: vault.authority,
    });

    Ok(())
}
