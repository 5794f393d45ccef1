use anchor_lang::prelude::*;

use crate::{constants::TASK_SEED, events::TaskAssigned, state::Task};

#[derive(Accounts)]
pub struct AssignTask<'info> {
    pub creator: Signer<'info>,
    #[account(
        mut,
        seeds = [TASK_SEED, task.id.to_le_bytes().as_ref()],
        bump = task.bump
    )]
    pub task: Account<'info, Task>,
}

pub fn handler(ctx: Context<AssignTask>, agent: Pubkey) -> Result<()> {
    let task = &mut ctx.accounts.task;
    task.assign(ctx.accounts.creator.key(), agent)?;

    msg!("Task {} assigned to {}", task.id, agent);
    emit!(TaskAssigned {
        task: task.key(),
        task_id: task.id,
        agent,
    });

    Ok(())
}
