use anchor_lang::prelude::*;

use crate::{
    constants::VAULT_SEED, error::VaultError, events::LstDelegationRecorded, state::Vault,
};

#[derive(Accounts)]
pub struct RecordLstDelegation<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<RecordLstDelegation>, amount: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.record_lst_delegation(amount)?;

    msg!("Recorded {} LST delegation", amount);
    emit!(LstDelegationRecorded {
        amount,
        lst_delegated: vault.lst_delegated,
    });

    Ok(())
}
