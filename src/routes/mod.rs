//! Router assembly.

mod common;
mod product;
mod user;

pub use common::common_routes_with_ready;
pub use product::product_routes;
pub use user::user_routes;
