//! Report handlers.

use axum::extract::State;
use axum::Json;

use tienda_core::TopSellingEntry;

use crate::state::AppState;

pub async fn top_selling(State(state): State<AppState>) -> Json<Vec<TopSellingEntry>> {
    Json(state.reports().top_selling())
}
