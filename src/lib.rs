//! TRAC Risk Detector Library
//!
//! Conversational risk assessment for crypto users. Given free-form text
//! the intent router decides whether it holds an address or a suspicious
//! message and returns a rule-based risk score with a readable verdict:
//! - Address format validation (ETH, BTC, permissive TRAC/OTHER)
//! - Scam signals: deny-list, low entropy, vanity zero density
//! - Simulated wallet activity derived from the address hash
//! - Message red flags: keywords, URLs, urgency language

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::activity::{simulate_activity, ActivitySource, HashedActivity};
pub use crate::core::address::{analyze_address, analyze_address_with};
pub use crate::core::intent::route;
pub use crate::core::message::analyze_message;
pub use crate::core::risk_score::{RiskScore, RiskScoreBuilder};
pub use models::config::ServerConfig;
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{
    ActivitySnapshot, AddressType, HelpPayload, IntentResult, MessageAssessment, RiskAssessment,
    RiskLevel,
};
