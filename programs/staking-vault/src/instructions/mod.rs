pub mod initialize_vault;
pub mod stake_sol;
pub mod record_lst_delegation;
pub mod distribute_brain_yield;

pub use initialize_vault::*;
pub use stake_sol::*;
pub use record_lst_delegation::*;
pub use distribute_brain_yield::*;
