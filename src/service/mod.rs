//! Per-resource CRUD services and request field validation.

mod product;
mod user;
mod validation;

pub use product::ProductService;
pub use user::UserService;
pub use validation::RequestValidator;
