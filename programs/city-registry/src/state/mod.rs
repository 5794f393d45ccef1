use anchor_lang::prelude::*;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, AGENT_RESERVED_BYTES, AGENT_SEED, BASE_OUTPUT_MULTIPLIER,
        BUILDING_RESERVED_BYTES, BUILDING_SEED, DISTRICTS, MAX_BUILDING_TYPE_LEN,
        MAX_DISTRICT_LEN, MAX_NAME_LEN, STARTING_LEVEL,
    },
    error::RegistryError,
};

/// A city agent, one per wallet.
///
/// `level`, `tasks_completed`, `brain_earned`, `brain_spent` and `reputation`
/// are part of the layout read by clients, but no instruction writes them yet.
#[account]
pub struct Agent {
    pub bump: u8,
    pub layout_version: u8,
    pub owner: Pubkey,
    pub name: String,
    pub district: String,
    pub brain_earned: u64,
    pub brain_spent: u64,
    pub tasks_completed: u64,
    pub level: u16,
    pub buildings: u32,
    pub reputation: u64,
    pub reserved: [u8; AGENT_RESERVED_BYTES],
}

impl Agent {
    pub const SPACE: usize = 8
        + 1
        + 1
        + 32
        + (4 + MAX_NAME_LEN)
        + (4 + MAX_DISTRICT_LEN)
        + 8
        + 8
        + 8
        + 2
        + 4
        + 8
        + AGENT_RESERVED_BYTES;

    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[AGENT_SEED, owner.as_ref()], &crate::ID)
    }

    pub fn is_registered(&self) -> bool {
        self.layout_version != 0
    }

    pub fn register(
        &mut self,
        bump: u8,
        owner: Pubkey,
        name: String,
        district: String,
    ) -> Result<()> {
        require!(!self.is_registered(), RegistryError::AlreadyRegistered);
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            RegistryError::InvalidName
        );
        require!(
            DISTRICTS.contains(&district.as_str()),
            RegistryError::InvalidDistrict
        );

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.owner = owner;
        self.name = name;
        self.district = district;
        self.brain_earned = 0;
        self.brain_spent = 0;
        self.tasks_completed = 0;
        self.level = STARTING_LEVEL;
        self.buildings = 0;
        self.reputation = 0;
        self.reserved = [0; AGENT_RESERVED_BYTES];
        Ok(())
    }

    pub fn record_building(&mut self) -> Result<()> {
        self.buildings = self
            .buildings
            .checked_add(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[account]
pub struct Building {
    pub bump: u8,
    pub layout_version: u8,
    pub owner: Pubkey,
    pub building_type: String,
    pub level: u16,
    pub brain_cost: u64,
    pub output_multiplier: u16,
    pub grid_x: i16,
    pub grid_y: i16,
    pub reserved: [u8; BUILDING_RESERVED_BYTES],
}

impl Building {
    pub const SPACE: usize =
        8 + 1 + 1 + 32 + (4 + MAX_BUILDING_TYPE_LEN) + 2 + 8 + 2 + 2 + 2 + BUILDING_RESERVED_BYTES;

    pub fn address(owner: &Pubkey, grid_x: i16, grid_y: i16) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                BUILDING_SEED,
                owner.as_ref(),
                grid_x.to_le_bytes().as_ref(),
                grid_y.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn is_placed(&self) -> bool {
        self.layout_version != 0
    }

    pub fn place(
        &mut self,
        bump: u8,
        owner: Pubkey,
        building_type: String,
        brain_cost: u64,
        grid_x: i16,
        grid_y: i16,
    ) -> Result<()> {
        require!(!self.is_placed(), RegistryError::PlotOccupied);
        require!(!building_type.is_empty(), RegistryError::InvalidBuildingType);
        require!(
            building_type.len() <= MAX_BUILDING_TYPE_LEN,
            RegistryError::BuildingTypeTooLong
        );

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.owner = owner;
        self.building_type = building_type;
        self.level = 1;
        self.brain_cost = brain_cost;
        self.output_multiplier = BASE_OUTPUT_MULTIPLIER;
        self.grid_x = grid_x;
        self.grid_y = grid_y;
        self.reserved = [0; BUILDING_RESERVED_BYTES];
        Ok(())
    }
}
