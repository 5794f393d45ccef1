use anchor_lang::prelude::*;

use crate::{constants::AGENT_SEED, events::AgentRegistered, state::Agent};

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    // An existing agent is loaded as-is; `Agent::register` rejects it.
    #[account(
        init_if_needed,
        payer = owner,
        space = Agent::SPACE,
        seeds = [AGENT_SEED, owner.key().as_ref()],
        bump
    )]
    pub agent: Account<'info, Agent>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterAgent>, name: String, district: String) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    agent.register(ctx.bumps.agent, ctx.accounts.owner.key(), name, district)?;

    msg!("Agent '{}' registered in {}", agent.name, agent.district);
    emit!(AgentRegistered {
        agent: agent.key(),
        owner: agent.owner,
        name: agent.name.clone(),
        district: agent.district.clone(),
    });

    Ok(())
}
