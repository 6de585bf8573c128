//! aqicast - AQI Prediction Web Front-End
//!
//! Serves a weather-measurement input form, runs the submitted values
//! through a pre-trained regression model, and renders the predicted
//! air-quality index with its severity category.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    AQICAST                       │
//! ├──────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌─────────────┐   ┌───────────┐  │
//! │  │  HTTP    │   │   Model     │   │   AQI     │  │
//! │  │  (Axum)  │──▶│   Gateway   │──▶│ Classifier│  │
//! │  │          │   │   (ONNX)    │   │           │  │
//! │  └──────────┘   └─────────────┘   └───────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```

mod aqi;
mod config;
mod error;
mod features;
mod handlers;
mod model;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model::{InferenceEngine, OnnxGateway};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "aqicast=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("aqicast server starting...");
    tracing::info!("Model artifact: {}", config.model_path);

    // Load the model once. A failed load downgrades to an unavailable
    // gateway; the server still starts and answers every prediction
    // request with the "model not loaded" message.
    let engine: Arc<dyn InferenceEngine> = match OnnxGateway::load(&config.model_path) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            tracing::warn!("Model load failed, serving without predictions: {}", e);
            Arc::new(OnnxGateway::unavailable())
        }
    };

    // Build application state
    let state = AppState { engine };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn InferenceEngine>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
