use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::{
    constants::{BRAIN_SUPPLY_SEED, MINT_AUTHORITY_SEED},
    error::BrainError,
    events::BrainMinted,
    state::BrainSupply,
};

#[derive(Accounts)]
pub struct MintBrain<'info> {
    pub authority: Signer<'info>,
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
        constraint = recipient_ata.mint == mint.key() @ BrainError::MintMismatch
    )]
    pub recipient_ata: Account<'info, TokenAccount>,
    /// CHECK: data-less PDA, only ever used as the mint's signing authority.
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = brain_supply.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}

/// Mints `amount` to the recipient. Not tied to any marketplace task: the
/// supply authority decides when a reward is due.
pub fn handler(ctx: Context<MintBrain>, amount: u64) -> Result<()> {
    let brain_supply = &mut ctx.accounts.brain_supply;
    brain_supply.record_mint(ctx.accounts.authority.key(), amount)?;

    let bump = [brain_supply.mint_authority_bump];
    let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &bump];
    let signer_seeds = &[seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Minted {} base units of BRAIN for task completion", amount);
    emit!(BrainMinted {
        recipient: ctx.accounts.recipient_ata.owner,
        amount,
        total_minted: brain_supply.total_minted,
    });

    Ok(())
}
