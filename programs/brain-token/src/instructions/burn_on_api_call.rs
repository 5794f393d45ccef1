use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::{
    constants::BRAIN_SUPPLY_SEED,
    error::BrainError,
    events::BrainBurned,
    state::BrainSupply,
};

#[derive(Accounts)]
pub struct BurnBrain<'info> {
    pub burner: Signer<'info>,
    #[account(
        mut,
        seeds = [BRAIN_SUPPLY_SEED],
        bump = brain_supply.bump
    )]
    pub brain_supply: Account<'info, BrainSupply>,
    #[account(
        mut,
        address = brain_supply.mint @ BrainError::MintMismatch
    )]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = burner_ata.mint == mint.key() @ BrainError::MintMismatch,
        constraint = burner_ata.owner == burner.key() @ BrainError::Unauthorized
    )]
    pub burner_ata: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<BurnBrain>, amount: u64) -> Result<()> {
    let brain_supply = &mut ctx.accounts.brain_supply;
    brain_supply.record_burn(ctx.accounts.burner_ata.amount, amount)?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.burner_ata.to_account_info(),
                authority: ctx.accounts.burner.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Burned {} base units of BRAIN for API call", amount);
    emit!(BrainBurned {
        burner: ctx.accounts.burner.key(),
        amount,
        total_burned: brain_supply.total_burned,
    });

    Ok(())
}
