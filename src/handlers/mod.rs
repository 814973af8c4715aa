//! HTTP handlers for product and user CRUD.

pub mod product;
pub mod user;

use crate::error::AppError;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
    }
}
