//! Models Module - Data Structures & Configuration
//!
//! Value objects returned by the scorers, the error taxonomy and the
//! server configuration.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
