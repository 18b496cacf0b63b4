use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Marks a `DbErr::Custom` raised by an `ActiveModelBehavior` hook that
/// rejected a field value.
const HOOK_VALIDATION: &str = "validation error: ";

impl ModelError {
    /// Error to return from a sea-orm hook. A validation failure survives the
    /// trip through `DbErr` and comes back out of `From<DbErr>` unchanged.
    pub fn into_db_err(self) -> DbErr {
        match self {
            ModelError::Validation(msg) => DbErr::Custom(format!("{HOOK_VALIDATION}{msg}")),
            other => DbErr::Custom(other.to_string()),
        }
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if let DbErr::Custom(msg) = &e {
            if let Some(reason) = msg.strip_prefix(HOOK_VALIDATION) {
                return ModelError::Validation(reason.to_string());
            }
        }
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Conflict(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
