use anchor_lang::prelude::*;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, MAX_DESCRIPTION_LEN, MAX_RESULT_URI_LEN, TASK_RESERVED_BYTES, TASK_SEED,
    },
    error::MarketError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskType {
    Script,
    Voiceover,
    Copy,
    Ugc,
}

/// Task lifecycle. Transitions only move forward and `Verified` is terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
    Verified,
}

impl TaskStatus {
    pub fn next(self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Open => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => Some(TaskStatus::Verified),
            TaskStatus::Verified => None,
        }
    }
}

#[account]
pub struct Task {
    pub bump: u8,
    pub layout_version: u8,
    pub id: u64,
    pub creator: Pubkey,
    pub task_type: TaskType,
    pub description: String,
    pub reward_brain: u64,
    /// `Pubkey::default()` until the task is assigned.
    pub assigned_agent: Pubkey,
    pub status: TaskStatus,
    pub result_uri: String,
    pub reserved: [u8; TASK_RESERVED_BYTES],
}

impl Task {
    pub const SPACE: usize = 8
        + 1
        + 1
        + 8
        + 32
        + 1
        + (4 + MAX_DESCRIPTION_LEN)
        + 8
        + 32
        + 1
        + (4 + MAX_RESULT_URI_LEN)
        + TASK_RESERVED_BYTES;

    pub fn address(task_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TASK_SEED, task_id.to_le_bytes().as_ref()], &crate::ID)
    }

    pub fn is_created(&self) -> bool {
        self.layout_version != 0
    }

    pub fn assignee(&self) -> Option<Pubkey> {
        (self.assigned_agent != Pubkey::default()).then_some(self.assigned_agent)
    }

    pub fn open(
        &mut self,
        bump: u8,
        task_id: u64,
        creator: Pubkey,
        task_type: TaskType,
        description: String,
        reward_brain: u64,
    ) -> Result<()> {
        require!(!self.is_created(), MarketError::DuplicateTaskId);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            MarketError::DescriptionTooLong
        );

        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.id = task_id;
        self.creator = creator;
        self.task_type = task_type;
        self.description = description;
        self.reward_brain = reward_brain;
        self.assigned_agent = Pubkey::default();
        self.status = TaskStatus::Open;
        self.result_uri = String::new();
        self.reserved = [0; TASK_RESERVED_BYTES];
        Ok(())
    }

    pub fn assign(&mut self, signer: Pubkey, agent: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.creator, MarketError::Unauthorized);
        let next = self.transition_from(TaskStatus::Open)?;
        require_keys_neq!(agent, Pubkey::default(), MarketError::InvalidAgent);

        self.assigned_agent = agent;
        self.status = next;
        Ok(())
    }

    pub fn submit_result(&mut self, signer: Pubkey, result_uri: String) -> Result<()> {
        require!(
            self.assignee() == Some(signer),
            MarketError::Unauthorized
        );
        let next = self.transition_from(TaskStatus::InProgress)?;
        require!(
            result_uri.len() <= MAX_RESULT_URI_LEN,
            MarketError::UriTooLong
        );

        self.result_uri = result_uri;
        self.status = next;
        Ok(())
    }

    pub fn verify(&mut self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.creator, MarketError::Unauthorized);
        self.status = self.transition_from(TaskStatus::Completed)?;
        Ok(())
    }

    // Callers write the returned status only after their remaining checks pass.
    fn transition_from(&self, from: TaskStatus) -> Result<TaskStatus> {
        require!(self.status == from, MarketError::InvalidTransition);
        self.status
            .next()
            .ok_or_else(|| error!(MarketError::InvalidTransition))
    }
}
