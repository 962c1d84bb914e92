//! Service layer.
//!
//! Each service validates input, applies the domain rules from
//! `tienda-core` and talks to the store. Handlers stay thin.

pub mod cart_service;
pub mod product_service;
pub mod report_service;
pub mod user_service;

pub use cart_service::CartService;
pub use product_service::ProductService;
pub use report_service::ReportService;
pub use user_service::UserService;
