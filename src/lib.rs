//! Sales Prediction API Library
//!
//! A single-endpoint HTTP service that turns one quarter of business inputs
//! into a formula-based sales estimate, five what-if scenarios, and a
//! compounding quarterly forecast. The computational core is pure and draws
//! its randomness through an injectable [`noise::NoiseSource`].
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod noise;
pub mod openapi;
pub mod services;
pub mod tracing;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::prediction::PredictionService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub prediction: Arc<PredictionService>,
}

/// Build the application router: prediction endpoint, liveness root,
/// health probes, Swagger UI, request-id correlation, and HTTP tracing.
///
/// Environment-dependent layers (CORS, compression, timeouts) are applied
/// by the binary on top of this.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/predict", post(handlers::predict::predict))
        .nest("/health", handlers::health::health_routes())
        .merge(openapi::swagger_ui())
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
