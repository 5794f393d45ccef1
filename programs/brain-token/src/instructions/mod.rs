pub mod initialize_brain;
pub mod mint_on_task_completion;
pub mod burn_on_api_call;

pub use initialize_brain::*;
pub use mint_on_task_completion::*;
pub use burn_on_api_call::*;
