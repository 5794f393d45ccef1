use anchor_lang::prelude::*;

use crate::state::TaskType;

#[event]
pub struct TaskCreated {
    pub task: Pubkey,
    pub task_id: u64,
    pub creator: Pubkey,
    pub task_type: TaskType,
    pub reward_brain: u64,
}

#[event]
pub struct TaskAssigned {
    pub task: Pubkey,
    pub task_id: u64,
    pub agent: Pubkey,
}

#[event]
pub struct TaskResultSubmitted {
    pub task: Pubkey,
    pub task_id: u64,
    pub agent: Pubkey,
    pub result_uri: String,
}

#[event]
pub struct TaskVerified {
    pub task: Pubkey,
    pub task_id: u64,
    pub agent: Pubkey,
    pub reward_brain: u64,
}
