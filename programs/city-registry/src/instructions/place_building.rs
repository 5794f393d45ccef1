use anchor_lang::prelude::*;

use crate::{
    constants::{AGENT_SEED, BUILDING_SEED},
    error::RegistryError,
    events::BuildingPlaced,
    state::{Agent, Building},
};

#[derive(Accounts)]
#[instruction(building_type: String, brain_cost: u64, grid_x: i16, grid_y: i16)]
pub struct PlaceBuilding<'info> {
    #[account(
        mut,
        seeds = [AGENT_SEED, owner.key().as_ref()],
        bump = agent.bump,
        constraint = agent.owner == owner.key() @ RegistryError::Unauthorized
    )]
    pub agent: Account<'info, Agent>,
    #[account(
        init_if_needed,
        payer = owner,
        space = Building::SPACE,
        seeds = [
            BUILDING_SEED,
            owner.key().as_ref(),
            grid_x.to_le_bytes().as_ref(),
            grid_y.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub building: Account<'info, Building>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PlaceBuilding>,
    building_type: String,
    brain_cost: u64,
    grid_x: i16,
    grid_y: i16,
) -> Result<()> {
    let building = &mut ctx.accounts.building;
    let agent = &mut ctx.accounts.agent;

    building.place(
        ctx.bumps.building,
        agent.owner,
        building_type,
        brain_cost,
        grid_x,
        grid_y,
    )?;
    agent.record_building()?;

    msg!(
        "Building '{}' placed at ({}, {})",
        building.building_type,
        grid_x,
        grid_y
    );
    emit!(BuildingPlaced {
        building: building.key(),
        owner: agent.owner,
        building_type: building.building_type.clone(),
        grid_x,
        grid_y,
        total_buildings: agent.buildings,
    });

    Ok(())
}
