pub mod amount;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use amount::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("3JJ5NNG5trMYsDoMXoAgvX3XFoFWnDagW16QyXRXdt8Z");

#[program]
pub mod brain_token {
    use super::*;

    pub fn initialize_brain(ctx: Context<InitializeBrain>, decimals: u8) -> Result<()> {
        initialize_brain::handler(ctx, decimals)
    }

    pub fn mint_on_task_completion(ctx: Context<MintBrain>, amount: u64) -> Result<()> {
        mint_on_task_completion::handler(ctx, amount)
    }

    pub fn burn_on_api_call(ctx: Context<BurnBrain>, amount: u64) -> Result<()> {
        burn_on_api_call::handler(ctx, amount)
    }
}
