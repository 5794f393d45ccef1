use anchor_lang::prelude::*;

use crate::{
    constants::VAULT_SEED, error::VaultError, events::BrainYieldDistributed, state::Vault,
};

// Bookkeeping only; the BRAIN itself moves through the token program.
#[derive(Accounts)]
pub struct DistributeBrainYield<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<DistributeBrainYield>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.record_brain_yield(amount)?;

    msg!("Distributed {} BRAIN yield to treasury", amount);
    emit!(BrainYieldDistributed {
        amount,
        brain_yield_distributed: vault.brain_yield_distributed,
    });

    Ok(())
}
