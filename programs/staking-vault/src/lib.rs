pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("CdTaBicv2ppsi8y9YxACvb73qsT2r3A12c26tDTH2unS");

#[program]
pub mod staking_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        initialize_vault::handler(ctx)
    }

    pub fn stake_sol(ctx: Context<StakeSol>, amount: u64) -> Result<()> {
        stake_sol::handler(ctx, amount)
    }

    pub fn record_lst_delegation(ctx: Context<RecordLstDelegation>, amount: u64) -> Result<()> {
        record_lst_delegation::handler(ctx, amount)
    }

    pub fn distribute_brain_yield(ctx: Context<DistributeBrainYield>, amount: u64) -> Result<()> {
        distribute_brain_yield::handler(ctx, amount)
    }
}
