pub mod create_task;
pub mod assign_task;
pub mod submit_result;
pub mod verify_task;

pub use create_task::*;
pub use assign_task::*;
pub use submit_result::*;
pub use verify_task::*;
