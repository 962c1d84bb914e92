//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /                                   welcome                     │
//! │  GET    /health                             store stats                 │
//! │  POST   /register  /login                   users                       │
//! │  GET    /api/products                       list                        │
//! │  POST   /api/products  /api/products/batch  create                      │
//! │  GET    /api/products/{id}                  get / PUT / DELETE          │
//! │  POST   /api/cart                           create empty cart           │
//! │  GET    /api/cart/{cartId}                  get / DELETE                │
//! │  POST   /api/cart/{cartId}/add              add item                    │
//! │  DELETE /api/cart/{cartId}/item/{productId} remove item                 │
//! │  POST   /api/cart/{cartId}/checkout         checkout                    │
//! │  GET    /api/reports/top-selling            report                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod health;
pub mod products;
pub mod reports;
pub mod users;

use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ApiConfig, ConfigError};
use crate::state::AppState;

/// `{"message": "..."}` body for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// All routes, without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/batch", post(products::create_products_batch))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/cart", post(cart::create_cart))
        .route(
            "/api/cart/{cart_id}",
            get(cart::get_cart).delete(cart::delete_cart),
        )
        .route("/api/cart/{cart_id}/add", post(cart::add_item))
        .route(
            "/api/cart/{cart_id}/item/{product_id}",
            delete(cart::remove_item),
        )
        .route("/api/cart/{cart_id}/checkout", post(cart::checkout))
        .route("/api/reports/top-selling", get(reports::top_selling))
        .with_state(state)
}

/// The full application: routes plus CORS and request tracing.
pub fn app(state: AppState, config: &ApiConfig) -> Result<Router, ConfigError> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_header_values()?))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-csrf-token"),
        ])
        .allow_credentials(true);

    Ok(router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    /// Sends one request through the router and decodes the JSON reply
    /// (`Value::Null` for an empty body).
    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }
}
