pub const TASK_SEED: &[u8] = b"task";

pub const ACCOUNT_LAYOUT_V1: u8 = 1;

pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_RESULT_URI_LEN: usize = 256;

// Keep reserved bytes at the tail of each account to absorb future schema changes
// without immediate realloc migrations.
pub const TASK_RESERVED_BYTES: usize = 64;
