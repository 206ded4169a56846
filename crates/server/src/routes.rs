use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::wordbank::WordBankService;

pub mod wordbank;

/// Shared handler state; the service is a thin handle over the store.
#[derive(Clone)]
pub struct AppState {
    pub wordbank: WordBankService,
}

/// Build the application router. `cors` only wraps the `/api` routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/api/wordbank",
            get(wordbank::get_word_bank).post(wordbank::save_word_bank),
        )
        // word lists have no size cap
        .layer(DefaultBodyLimit::disable())
        .layer(cors);

    api.with_state(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx responses are logged as errors
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
