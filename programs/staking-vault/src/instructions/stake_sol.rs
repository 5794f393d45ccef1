use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{STAKE_SEED, VAULT_SEED, VAULT_SOL_SEED},
    events::SolStaked,
    state::{StakeReceipt, Vault},
};

#[derive(Accounts)]
pub struct StakeSol<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
    /// CHECK: system-owned PDA that only holds deposited lamports.
    #[account(
        mut,
        seeds = [VAULT_SOL_SEED],
        bump
    )]
    pub vault_sol: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = staker,
        space = StakeReceipt::SPACE,
        seeds = [STAKE_SEED, staker.key().as_ref()],
        bump
    )]
    pub stake_receipt: Account<'info, StakeReceipt>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StakeSol>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let staker = ctx.accounts.staker.key();

    let first_stake = ctx.accounts.stake_receipt.record_stake(
        ctx.bumps.stake_receipt,
        staker,
        amount,
        now,
    )?;
    ctx.accounts.vault.record_deposit(amount, first_stake)?;
    Vault::check_sol_rent_exempt(
        ctx.accounts.vault_sol.lamports(),
        amount,
        Rent::get()?.minimum_balance(0),
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.staker.to_account_info(),
                to: ctx.accounts.vault_sol.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Staked {} lamports", amount);
    emit!(SolStaked {
        staker,
        amount,
        sol_deposited: ctx.accounts.stake_receipt.sol_deposited,
        total_sol_deposited: ctx.accounts.vault.total_sol_deposited,
    });

    Ok(())
}
