use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turns unique and foreign key violations into `ConstraintViolation`
    /// so the web layer can answer 409 instead of 500.
    pub fn into_constraint(self, what: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(format!("{} already exists", what))
        } else if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(format!("{} references a missing user", what))
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_a_constraint_violation() {
        let err = StorageError::NotFound;
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
        assert!(matches!(err.into_constraint("user"), StorageError::NotFound));
    }

    #[test]
    fn test_row_not_found_passes_through() {
        let err = StorageError::Database(sqlx::Error::RowNotFound).into_constraint("user");
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
    }
}
