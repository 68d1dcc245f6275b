use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{caixa, cleanup, exports, health, inventory, materials, purchases, weighing};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/precos", materials::router())
        .nest("/api/estoque", inventory::router())
        .nest("/api/compras", purchases::router())
        .nest("/api/caixa", caixa::router())
        .nest("/api/cleanup", cleanup::router())
        .nest("/api/export", exports::router())
        .nest("/api/pesagem", weighing::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
