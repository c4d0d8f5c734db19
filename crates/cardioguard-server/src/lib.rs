//! cardioguard-server
//!
//! JSON API over the assessment pipeline. One classifier is loaded at
//! startup and shared by every request.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/parameters", get(routes::parameters::list_parameters))
        .route("/assess", post(routes::assess::assess_parameters))
        .layer(cors)
        .with_state(state)
}
