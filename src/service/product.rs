//! Product CRUD against the `product` table.

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::store::map_unique_violation;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, price, qty";
const NAME_TAKEN: &str = "product name already exists";

pub struct ProductService;

impl ProductService {
    /// All rows in insertion (rowid) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM product ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key, or None.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM product WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row with a generated id; returns the persisted record.
    pub async fn create(pool: &SqlitePool, input: &NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO product (name, description, price, qty) VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, name = %input.name, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.qty)
            .fetch_one(pool)
            .await
            .map_err(|e| map_unique_violation(e, NAME_TAKEN))
    }

    /// Full replace of all non-id fields. Returns None when id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewProduct,
    ) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE product SET name = ?, description = ?, price = ?, qty = ? WHERE id = ? RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.qty)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| map_unique_violation(e, NAME_TAKEN))
    }

    /// Delete one row by id. Returns false when no row existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM product WHERE id = ?";
        tracing::debug!(sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
