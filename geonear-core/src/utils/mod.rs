//! A collection of various utility helpers.

mod error;
pub use self::error::{GenericError, GenericResult};
