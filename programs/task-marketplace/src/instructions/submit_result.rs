use anchor_lang::prelude::*;

use crate::{constants::TASK_SEED, events::TaskResultSubmitted, state::Task};

#[derive(Accounts)]
pub struct SubmitResult<'info> {
    pub agent: Signer<'info>,
    #[account(
        mut,
        seeds = [TASK_SEED, task.id.to_le_bytes().as_ref()],
        bump = task.bump
    )]
    pub task: Account<'info, Task>,
}

pub fn handler(ctx: Context<SubmitResult>, result_uri: String) -> Result<()> {
    let task = &mut ctx.accounts.task;
    task.submit_result(ctx.accounts.agent.key(), result_uri)?;

    msg!("Task {} result submitted", task.id);
    emit!(TaskResultSubmitted {
        task: task.key(),
        task_id: task.id,
        agent: task.assigned_agent,
        result_uri: task.result_uri.clone(),
    });

    Ok(())
}
