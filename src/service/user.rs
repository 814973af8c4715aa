//! User CRUD against the `user` table.

use crate::error::AppError;
use crate::model::{NewUser, User};
use crate::store::map_unique_violation;
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, name, email, password, age, location, choice1, choice2, choice3, choice4";
const EMAIL_TAKEN: &str = "user email already exists";

pub struct UserService;

impl UserService {
    /// All rows in insertion (rowid) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM user ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key, or None.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM user WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row with a generated id; returns the persisted record.
    pub async fn create(pool: &SqlitePool, input: &NewUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO user (name, email, password, age, location, choice1, choice2, choice3, choice4) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, email = %input.email, "query");
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password)
            .bind(input.age)
            .bind(&input.location)
            .bind(&input.choice1)
            .bind(&input.choice2)
            .bind(&input.choice3)
            .bind(&input.choice4)
            .fetch_one(pool)
            .await
            .map_err(|e| map_unique_violation(e, EMAIL_TAKEN))
    }

    /// Full replace of all non-id fields. Returns None when id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewUser,
    ) -> Result<Option<User>, AppError> {
        let sql = format!(
            "UPDATE user SET name = ?, email = ?, password = ?, age = ?, location = ?, \
             choice1 = ?, choice2 = ?, choice3 = ?, choice4 = ? WHERE id = ? RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password)
            .bind(input.age)
            .bind(&input.location)
            .bind(&input.choice1)
            .bind(&input.choice2)
            .bind(&input.choice3)
            .bind(&input.choice4)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| map_unique_violation(e, EMAIL_TAKEN))
    }

    /// Delete one row by id. Returns false when no row existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM user WHERE id = ?";
        tracing::debug!(sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
