//! Storefront: HTTP CRUD backend for products and users over SQLite.

pub mod config;
pub mod error;
pub mod response;
pub mod state;
pub mod store;
pub mod model;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::Settings;
pub use error::AppError;
pub use model::{NewProduct, NewUser, Product, User};
pub use state::AppState;
pub use store::{connect, ensure_tables};
pub use routes::{common_routes_with_ready, product_routes, user_routes};
pub use service::{ProductService, UserService};
