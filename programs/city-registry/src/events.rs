use anchor_lang::prelude::*;

#[event]
pub struct AgentRegistered {
    pub agent: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub district: String,
}

#[event]
pub struct BuildingPlaced {
    pub building: Pubkey,
    pub owner: Pubkey,
    pub building_type: String,
    pub grid_x: i16,
    pub grid_y: i16,
    pub total_buildings: u32,
}
