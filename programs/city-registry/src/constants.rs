pub const AGENT_SEED: &[u8] = b"agent";
pub const BUILDING_SEED: &[u8] = b"building";

pub const ACCOUNT_LAYOUT_V1: u8 = 1;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DISTRICT_LEN: usize = 32;
pub const MAX_BUILDING_TYPE_LEN: usize = 32;

pub const DISTRICTS: [&str; 5] = ["Studio", "Agency", "Downtown", "Lab", "Marketplace"];

pub const STARTING_LEVEL: u16 = 1;
/// Basis points, 100 = 1x.
pub const BASE_OUTPUT_MULTIPLIER: u16 = 100;

// Keep reserved bytes at the tail of each account to absorb future schema changes
// without immediate realloc migrations.
pub const AGENT_RESERVED_BYTES: usize = 64;
pub const BUILDING_RESERVED_BYTES: usize = 32;
