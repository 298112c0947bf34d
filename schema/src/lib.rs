// Pokedex Schema - Shared record definitions
// This crate holds the denormalized view records produced by the aggregation
// layer and the favorites snapshot type. It performs no I/O, so both the client
// library and any front end can depend on it directly.

// Re-export the main types
pub use encounters::*;
pub use entity::*;
pub use favorites::*;
pub use species_data::*;

pub mod encounters;
pub mod entity;
pub mod favorites;
pub mod species_data;
