use sea_orm::DbErr;
use thiserror::Error;

/// Message used when either side of a menu entry is missing; callers are not
/// told which one.
pub const REFERENCE_NOT_FOUND: &str = "Restaurant or Pizza not found";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Reference(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn reference() -> Self { Self::Reference(REFERENCE_NOT_FOUND.to_string()) }

    /// True for bad input, as opposed to missing rows or storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Model(models::errors::ModelError::Validation(_)))
    }
}

pub(crate) fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }
