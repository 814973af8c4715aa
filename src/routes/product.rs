//! Product CRUD routes.

use crate::handlers::product::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/product", get(list).post(create))
        .route(
            "/product/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
