//! User CRUD routes.

use crate::handlers::user::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/user", get(list).post(create))
        .route("/user/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
