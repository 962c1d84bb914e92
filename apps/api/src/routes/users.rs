//! Registration and login handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use tienda_core::{Credentials, User};

use crate::error::ApiResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub const LOGIN_MESSAGE: &str = "Login successful";

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(credentials) = payload?;
    let user = state
        .users()
        .register(credentials.username, credentials.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(credentials) = payload?;
    state
        .users()
        .login(&credentials.username, credentials.password)
        .await?;
    Ok(Json(MessageResponse::new(LOGIN_MESSAGE)))
}
