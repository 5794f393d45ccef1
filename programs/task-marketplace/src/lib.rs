pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("5nnAtvyXk388f3SwQXihxiGxfyPQzy9U3dzPohvkH9fY");

#[program]
pub mod task_marketplace {
    use super::*;

    pub fn create_task(
        ctx: Context<CreateTask>,
        task_id: u64,
        task_type: TaskType,
        description: String,
        reward_brain: u64,
    ) -> Result<()> {
        create_task::handler(ctx, task_id, task_type, description, reward_brain)
    }

    pub fn assign_task(ctx: Context<AssignTask>, agent: Pubkey) -> Result<()> {
        assign_task::handler(ctx, agent)
    }

    pub fn submit_result(ctx: Context<SubmitResult>, result_uri: String) -> Result<()> {
        submit_result::handler(ctx, result_uri)
    }

    pub fn verify_task(ctx: Context<VerifyTask>) -> Result<()> {
        verify_task::handler(ctx)
    }
}
