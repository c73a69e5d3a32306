//! API Request Handlers

use axum::extract::{rejection::JsonRejection, Json, State};
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::types::*;
use crate::core::intent::route;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::IntentResult;
use crate::utils::constants::{
    APP_NAME, APP_VERSION, NETWORK_NAME, STATS_SAFE_ADDRESSES, STATS_SCAMS_FLAGGED,
    STATS_TOTAL_ANALYZED, STATS_UPTIME,
};

/// Shared application state
pub struct AppState {
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
        agent: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

// ============================================
// Mock Dashboard Stats
// ============================================

/// Random display counters; not tied to any real analysis
pub async fn get_stats() -> Json<StatsData> {
    let mut rng = rand::thread_rng();

    Json(StatsData {
        total_analyzed: rng.gen_range(STATS_TOTAL_ANALYZED.0..=STATS_TOTAL_ANALYZED.1),
        scams_flagged: rng.gen_range(STATS_SCAMS_FLAGGED.0..=STATS_SCAMS_FLAGGED.1),
        safe_addresses: rng.gen_range(STATS_SAFE_ADDRESSES.0..=STATS_SAFE_ADDRESSES.1),
        network: NETWORK_NAME.to_string(),
        uptime: STATS_UPTIME.to_string(),
    })
}

// ============================================
// Analyze (intent routing)
// ============================================

pub async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<IntentResult>> {
    let start = Instant::now();

    let Json(req) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    let message = req
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::bad_request("No message provided"))?;

    let result = route(&message);

    info!(
        intent = result.intent(),
        risk_score = ?result.risk_score(),
        latency_us = start.elapsed().as_micros() as u64,
        "✅ Analysis complete"
    );

    Ok(Json(result))
}
