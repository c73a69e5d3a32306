//! Utils Module - Shared Tables
//!
//! Fixed, read-only configuration shared by every scorer.

pub mod constants;

pub use constants::*;
