//! Record and request payload types for both resources.

mod product;
mod user;

pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
