//! TRAC Risk Detector HTTP API
//! Thin transport over the intent router

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
