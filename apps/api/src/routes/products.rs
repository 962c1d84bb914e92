//! Product catalogue handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use tienda_core::{NewProduct, Product};

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products().list())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.products().get(&id)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(draft) = payload?;
    let product = state.products().create(draft)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn create_products_batch(
    State(state): State<AppState>,
    payload: Result<Json<Vec<NewProduct>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<Product>>)> {
    let Json(drafts) = payload?;
    let products = state.products().create_batch(drafts)?;
    Ok((StatusCode::CREATED, Json(products)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(draft) = payload?;
    Ok(Json(state.products().update(&id, draft)?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.products().delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::routes::router;
    use crate::routes::test_support::send;
    use crate::state::AppState;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_product_crud() {
        let app = router(AppState::default());

        let (status, created) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({"id": "ignored", "name": "Tea", "description": "Green", "price": 3.5, "stock": 12})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_ne!(id, "ignored");
        assert_eq!(created["price"], 3.5);
        assert_eq!(created["stock"], 12);

        let (status, fetched) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/api/products/{id}"),
            Some(json!({"name": "Black Tea", "price": 4.25})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["name"], "Black Tea");
        assert_eq!(updated["price"], 4.25);

        let (status, body) = send(&app, "DELETE", &format!("/api/products/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_batch_create_and_list() {
        let app = router(AppState::default());

        let (status, created) = send(
            &app,
            "POST",
            "/api/products/batch",
            Some(json!([
                {"name": "Milk", "price": 1.2},
                {"name": "Bread", "price": 2}
            ])),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.as_array().unwrap().len(), 2);

        let (status, listed) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = router(AppState::default());

        let (status, body) = send(&app, "POST", "/api/products", Some(json!({"name": 5}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");

        let (status, _) = send(
            &app,
            "POST",
            "/api/products/batch",
            Some(json!({"name": "not an array", "price": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let app = router(AppState::default());
        let (status, _) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({"name": "Tea", "price": -1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_price_above_limit_rejected() {
        let app = router(AppState::default());
        let (status, body) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({"name": "Yacht", "price": 1e16})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");

        let (_, listed) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(listed, Value::Array(Vec::new()));
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let app = router(AppState::default());
        let (status, _) = send(&app, "DELETE", "/api/products/ghost", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
