// sqlx::Error -> StorageError mapping

use jobfolio_core::port::StorageError;

/// Convert sqlx::Error to StorageError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => StorageError::Constraint(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "787" | "3850" => StorageError::Constraint(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => StorageError::Backend(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "13" => StorageError::Backend(format!("Database full: {}", db_err.message())),
                    _ => StorageError::Backend(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                StorageError::Backend(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => StorageError::Backend("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            StorageError::Backend(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => StorageError::Backend(err.to_string()),
    }
}
