pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("5BQnx2X6gVmJ7WhQJ6vKCHHfdjkabR4oshVfQXukCCRg");

#[program]
pub mod city_registry {
    use super::*;

    pub fn register_agent(ctx: Context<RegisterAgent>, name: String, district: String) -> Result<()> {
        register_agent::handler(ctx, name, district)
    }

    pub fn place_building(
        ctx: Context<PlaceBuilding>,
        building_type: String,
        brain_cost: u64,
        grid_x: i16,
        grid_y: i16,
    ) -> Result<()> {
        place_building::handler(ctx, building_type, brain_cost, grid_x, grid_y)
    }
}
