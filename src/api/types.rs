//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;

/// Error body: `{"error": {"code": "...", "message": "..."}}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: ApiError {
                code: err.code_str().to_string(),
                message: err.message.clone(),
            },
        }
    }
}

// ============================================
// Analyze
// ============================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw user text; missing or empty is rejected
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================
// Stats (mock dashboard counters)
// ============================================

#[derive(Debug, Serialize)]
pub struct StatsData {
    pub total_analyzed: u32,
    pub scams_flagged: u32,
    pub safe_addresses: u32,
    pub network: String,
    pub uptime: String,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub agent: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}
