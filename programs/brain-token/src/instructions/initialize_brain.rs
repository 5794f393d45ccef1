use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use crate::{
    constants::{BRAIN_SUPPLY_SEED, MINT_AUTHORITY_SEED},
    error::BrainError,
    events::BrainInitialized,
    state::BrainSupply,
};

#[derive(Accounts)]
pub struct InitializeBrain<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    /// CHECK: data-less PDA, only ever used as the mint's signing authority.
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,
    #[account(
        constraint = mint.mint_authority == COption::Some(mint_authority.key())
            @ BrainError::InvalidMintAuthority
    )]
    pub mint: Account<'info, Mint>,
    #[account(
        init_if_needed,
        payer = authority,
        space = BrainSupply::SPACE,
        seeds = [BRAIN_SUPPLY_SEED],
        bump
    )]
    pub brain_supply: Account<'info, BrainSupply>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeBrain>, decimals: u8) -> Result<()> {
    let brain_supply = &mut ctx.accounts.brain_supply;
    brain_supply.initialize(
        ctx.bumps.brain_supply,
        ctx.bumps.mint_authority,
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        &ctx.accounts.mint,
        decimals,
    )?;

    msg!("BRAIN token initialized with {} decimals", decimals);
    emit!(BrainInitialized {
        authority: brain_supply.authority,
        mint: brain_supply.mint,
        decimals,
    });

    Ok(())
}
