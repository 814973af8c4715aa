//! Fixed response bodies.

use serde::Serialize;

/// Confirmation returned by the delete endpoints.
#[derive(Serialize)]
pub struct Deleted {
    pub msg: &'static str,
}

pub fn item_deleted() -> Deleted {
    Deleted { msg: "Item Deleted" }
}
