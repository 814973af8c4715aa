//! Pool construction and first-run table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const PRODUCT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS product (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL UNIQUE,
        description VARCHAR(200) NOT NULL,
        price REAL NOT NULL,
        qty INTEGER NOT NULL
    )
"#;

const USER_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(200) NOT NULL UNIQUE,
        password VARCHAR(40) NOT NULL,
        age INTEGER NOT NULL,
        location VARCHAR(100) NOT NULL,
        choice1 VARCHAR(40) NOT NULL,
        choice2 VARCHAR(40) NOT NULL,
        choice3 VARCHAR(40) NOT NULL,
        choice4 VARCHAR(40) NOT NULL
    )
"#;

/// Open the SQLite pool for `database_url`, creating the file if absent.
/// Call once at process start; close the pool on shutdown.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `product` and `user` tables if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(PRODUCT_DDL).execute(pool).await?;
    sqlx::query(USER_DDL).execute(pool).await?;
    Ok(())
}

/// Convert a SQLite unique-constraint failure into a conflict carrying
/// `message`; every other error passes through as a database error.
pub fn map_unique_violation(err: sqlx::Error, message: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Db(err),
    }
}
