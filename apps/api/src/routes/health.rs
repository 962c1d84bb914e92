//! Welcome and health endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME: &str = "Welcome to the Tienda e-commerce API!";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub carts: usize,
    pub users: usize,
    pub orders: usize,
}

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.store.stats();
    Json(HealthResponse {
        status: "ok",
        products: stats.products,
        carts: stats.carts,
        users: stats.users,
        orders: stats.orders,
    })
}
