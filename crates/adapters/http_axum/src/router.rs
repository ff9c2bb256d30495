//! Axum router assembly.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON resources with the `/` banner and `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, VR, OR>(state: AppState<SR, VR, OR>) -> Router
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(crate::api::routes::<SR, VR, OR>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn health_check() -> &'static str {
    "OK"
}
