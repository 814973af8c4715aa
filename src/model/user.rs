use serde::{Deserialize, Serialize};

/// A stored user row. The password is stored as given; hashing is out of
/// scope for this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i64,
    pub location: String,
    pub choice1: String,
    pub choice2: String,
    pub choice3: String,
    pub choice4: String,
}

/// Create/update payload: every user field except the generated id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i64,
    pub location: String,
    pub choice1: String,
    pub choice2: String,
    pub choice3: String,
    pub choice4: String,
}

impl NewUser {
    /// Keys that must be present in the request body.
    pub const REQUIRED: &'static [&'static str] = &[
        "name", "email", "password", "age", "location", "choice1", "choice2", "choice3",
        "choice4",
    ];
}
