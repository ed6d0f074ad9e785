pub mod cards;
pub mod cors;
pub mod health;

use crate::config::Config;
use crate::db::Repository;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors_headers = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // The origin guard runs inside the CorsLayer so preflight is still
    // answered with the proper headers, while disallowed origins never
    // reach a handler.
    Router::new()
        .route("/health", get(health::health))
        .route("/allcards", get(cards::all_cards))
        .route("/addcard", post(cards::add_card))
        .route("/updatecard/:id", put(cards::update_card))
        .route("/deletecard/:id", delete(cards::delete_card))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::enforce_origin,
        ))
        .layer(cors_headers)
        .with_state(state)
}
