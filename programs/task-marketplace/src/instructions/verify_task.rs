use anchor_lang::prelude::*;

use crate::{constants::TASK_SEED, events::TaskVerified, state::Task};

#[derive(Accounts)]
pub struct VerifyTask<'info> {
    pub creator: Signer<'info>,
    #[account(
        mut,
        seeds = [TASK_SEED, task.id.to_le_bytes().as_ref()],
        bump = task.bump
    )]
    pub task: Account<'info, Task>,
}

/// Marks the task verified. Paying `reward_brain` is a separate call on the
/// BRAIN token program made by its mint authority.
pub fn handler(ctx: Context<VerifyTask>) -> Result<()> {
    let task = &mut ctx.accounts.task;
    task.verify(ctx.accounts.creator.key())?;

    msg!("Task {} verified", task.id);
    emit!(TaskVerified {
        task: task.key(),
        task_id: task.id,
        agent: task.assigned_agent,
        reward_brain: task.reward_brain,
    });

    Ok(())
}
