//! Cart handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use tienda_core::Cart;

use crate::error::ApiResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub const CHECKOUT_MESSAGE: &str = "Purchase completed successfully!";

/// Body of `POST /api/cart/{cartId}/add`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

pub async fn create_cart(State(state): State<AppState>) -> (StatusCode, Json<Cart>) {
    (StatusCode::CREATED, Json(state.carts().create_empty()))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> ApiResult<Json<Cart>> {
    Ok(Json(state.carts().get(&cart_id)?))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<Json<Cart>> {
    let Json(request) = payload?;
    let cart = state
        .carts()
        .add_item(&cart_id, &request.product_id, request.quantity)?;
    Ok(Json(cart))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(String, String)>,
) -> ApiResult<Json<Cart>> {
    Ok(Json(state.carts().remove_item(&cart_id, &product_id)?))
}

pub async fn checkout(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.carts().checkout(&cart_id)?;
    Ok(Json(MessageResponse::new(CHECKOUT_MESSAGE)))
}

pub async fn delete_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.carts().delete(&cart_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::router;
    use crate::routes::test_support::send;
    use axum::Router;
    use serde_json::{json, Value};

    async fn create_product(app: &Router, name: &str, price: f64) -> String {
        let (_, body) = send(
            app,
            "POST",
            "/api/products",
            Some(json!({"name": name, "price": price, "stock": 10})),
        )
        .await;
        body["id"].as_str().unwrap().to_string()
    }

    async fn create_cart(app: &Router) -> String {
        let (status, body) = send(app, "POST", "/api/cart", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["items"], json!([]));
        assert_eq!(body["total"], 0.0);
        body["id"].as_str().unwrap().to_string()
    }

    async fn add(app: &Router, cart_id: &str, product_id: &str, quantity: i64) -> (StatusCode, Value) {
        send(
            app,
            "POST",
            &format!("/api/cart/{cart_id}/add"),
            Some(json!({"productId": product_id, "quantity": quantity})),
        )
        .await
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let app = router(AppState::default());
        let p1 = create_product(&app, "P1", 10.0).await;
        let cart_id = create_cart(&app).await;

        let (status, cart) = add(&app, &cart_id, &p1, 2).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["total"], 20.0);
        assert_eq!(cart["items"][0]["productId"], p1.as_str());
        assert_eq!(cart["items"][0]["price"], 10.0);

        let (_, cart) = add(&app, &cart_id, &p1, 3).await;
        assert_eq!(cart["total"], 50.0);
        assert_eq!(cart["items"][0]["quantity"], 5);

        let (status, cart) = send(
            &app,
            "DELETE",
            &format!("/api/cart/{cart_id}/item/{p1}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["total"], 0.0);
        assert_eq!(cart["items"], json!([]));
    }

    #[tokio::test]
    async fn test_add_rejects_bad_quantity() {
        let app = router(AppState::default());
        let p1 = create_product(&app, "P1", 10.0).await;
        let cart_id = create_cart(&app).await;

        let (status, body) = add(&app, &cart_id, &p1, 0).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");

        let (_, cart) = send(&app, "GET", &format!("/api/cart/{cart_id}"), None).await;
        assert_eq!(cart["items"], json!([]));
    }

    #[tokio::test]
    async fn test_add_unknown_product_or_cart() {
        let app = router(AppState::default());
        let p1 = create_product(&app, "P1", 10.0).await;
        let cart_id = create_cart(&app).await;

        let (status, _) = add(&app, &cart_id, "ghost", 1).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = add(&app, "ghost", &p1, 1).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_checkout() {
        let app = router(AppState::default());
        let p1 = create_product(&app, "P1", 10.0).await;
        let cart_id = create_cart(&app).await;
        add(&app, &cart_id, &p1, 2).await;

        let (status, body) = send(&app, "POST", &format!("/api/cart/{cart_id}/checkout"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], CHECKOUT_MESSAGE);

        let (status, _) = send(&app, "GET", &format!("/api/cart/{cart_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "POST", &format!("/api/cart/{cart_id}/checkout"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_cart() {
        let app = router(AppState::default());
        let cart_id = create_cart(&app).await;

        let (status, _) = send(&app, "DELETE", &format!("/api/cart/{cart_id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", &format!("/api/cart/{cart_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
