use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Agent name must be 1-32 bytes")]
    InvalidName,
    #[msg("Unknown district")]
    InvalidDistrict,
    #[msg("Agent already registered for this wallet")]
    AlreadyRegistered,
    #[msg("Building type must not be empty")]
    InvalidBuildingType,
    #[msg("Building type exceeds 32 bytes")]
    BuildingTypeTooLong,
    #[msg("Plot is already occupied")]
    PlotOccupied,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
