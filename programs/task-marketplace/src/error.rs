use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Task status does not allow this transition")]
    InvalidTransition,
    #[msg("A task with this id already exists")]
    DuplicateTaskId,
    #[msg("Description exceeds 256 bytes")]
    DescriptionTooLong,
    #[msg("Result URI exceeds 256 bytes")]
    UriTooLong,
    #[msg("Assigned agent must be a non-default address")]
    InvalidAgent,
}
