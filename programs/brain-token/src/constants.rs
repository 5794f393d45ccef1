pub const BRAIN_SUPPLY_SEED: &[u8] = b"brain-supply";
pub const MINT_AUTHORITY_SEED: &[u8] = b"brain-mint-authority";

pub const ACCOUNT_LAYOUT_V1: u8 = 1;

// Keep reserved bytes at the tail of each account to absorb future schema changes
// without immediate realloc migrations.
pub const BRAIN_SUPPLY_RESERVED_BYTES: usize = 64;
