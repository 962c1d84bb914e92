//! # Tienda API
//!
//! REST server for the storefront.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Layers                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  routes (axum)    CORS + TraceLayer, JSON in / JSON out          │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │                                       │
//! │  ┌──────────────────────────────▼───────────────────────────────────┐  │
//! │  │  services                                                        │  │
//! │  │  ┌──────────────┐ ┌──────────────┐ ┌────────────┐ ┌────────────┐│  │
//! │  │  │ProductService│ │ CartService  │ │UserService │ │ReportSvc   ││  │
//! │  │  │ validate +   │ │ add / remove │ │ argon2 on  │ │ tally +    ││  │
//! │  │  │ forward      │ │ checkout     │ │ blocking   │ │ rank       ││  │
//! │  │  └──────────────┘ └──────────────┘ └────────────┘ └────────────┘│  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │                                       │
//! │  ┌──────────────────────────────▼───────────────────────────────────┐  │
//! │  │  tienda-store (one Mutex)                                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `API_HOST` - Interface to bind (default: 0.0.0.0)
//! - `API_PORT` - HTTP port (default: 8080)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: http://localhost:8001)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod password;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
