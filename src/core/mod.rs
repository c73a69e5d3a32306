//! Core Module - Scoring & Routing Logic
//!
//! Pure functions only: every call depends on its input alone, so the
//! transport layer can run them concurrently without coordination.

pub mod activity;
pub mod address;
pub mod intent;
pub mod message;
pub mod risk_score;

pub use activity::*;
pub use address::*;
pub use intent::*;
pub use message::*;
pub use risk_score::*;
