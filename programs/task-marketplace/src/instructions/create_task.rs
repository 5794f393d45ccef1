use anchor_lang::prelude::*;

use crate::{
    constants::TASK_SEED,
    events::TaskCreated,
    state::{Task, TaskType},
};

#[derive(Accounts)]
#[instruction(task_id: u64)]
pub struct CreateTask<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        init_if_needed,
        payer = creator,
        space = Task::SPACE,
        seeds = [TASK_SEED, task_id.to_le_bytes().as_ref()],
        bump
    )]
    pub task: Account<'info, Task>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateTask>,
    task_id: u64,
    task_type: TaskType,
    description: String,
    reward_brain: u64,
) -> Result<()> {
    let task = &mut ctx.accounts.task;
    task.open(
        ctx.bumps.task,
        task_id,
        ctx.accounts.creator.key(),
        task_type,
        description,
        reward_brain,
    )?;

    msg!("Task {} created, reward: {} BRAIN", task_id, reward_brain);
    emit!(TaskCreated {
        task: task.key(),
        task_id,
        creator: task.creator,
        task_type,
        reward_brain,
    });

    Ok(())
}
