pub mod register_agent;
pub mod place_building;

pub use register_agent::*;
pub use place_building::*;
