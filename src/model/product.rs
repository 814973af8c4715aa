use serde::{Deserialize, Serialize};

/// A stored product row. `id` is assigned by the database and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// Create/update payload: every product field except the generated id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl NewProduct {
    /// Keys that must be present in the request body.
    pub const REQUIRED: &'static [&'static str] = &["name", "description", "price", "qty"];
}
