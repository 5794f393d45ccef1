pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_SOL_SEED: &[u8] = b"vault-sol";
pub const STAKE_SEED: &[u8] = b"stake";

pub const ACCOUNT_LAYOUT_V1: u8 = 1;

// Keep reserved bytes at the tail of each account to absorb future schema changes
// without immediate realloc migrations.
pub const VAULT_RESERVED_BYTES: usize = 64;
pub const STAKE_RECEIPT_RESERVED_BYTES: usize = 32;
