use anchor_lang::prelude::*;

#[event]
pub struct BrainInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct BrainMinted {
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
}

#[event]
pub struct BrainBurned {
    pub burner: Pubkey,
    pub amount: u64,
    pub total_burned: u64,
}
