//! Contains extension logic of the command surface.

pub mod generate;
pub mod session;
