use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{Demonstrative, WeighingForm};
use crate::services::weighing_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/demonstrativo", post(compute_demonstrative))
}

/// Stateless: the demonstrative is computed from the submitted form and
/// handed back for the PDF renderer; nothing is stored.
pub async fn compute_demonstrative(
    Json(form): Json<WeighingForm>,
) -> Result<Json<Demonstrative>, AppError> {
    info!(
        "POST /api/pesagem/demonstrativo - {} product(s)",
        form.produtos.len()
    );

    let demonstrative = weighing_service::compute_demonstrative(form)?;
    Ok(Json(demonstrative))
}
