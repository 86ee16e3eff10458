use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::{controller::webhook::github_webhook, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/webhook/github", post(github_webhook))
        .layer(TraceLayer::new_for_http())
}
