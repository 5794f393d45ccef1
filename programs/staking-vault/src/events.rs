use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct SolStaked {
    pub staker: Pubkey,
    pub amount: u64,
    pub sol_deposited: u64,
    pub total_sol_deposited: u64,
}

#[event]
pub struct LstDelegationRecorded {
    pub amount: u64,
    pub lst_delegated: u64,
}

#[event]
pub struct BrainYieldDistributed {
    pub amount: u64,
    pub brain_yield_distributed: u64,
}
