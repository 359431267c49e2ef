use bibliotheca_core::{AppError, AppResult};

/// Short category name used in log fields.
pub fn error_kind(err: &AppError) -> &'static str {
    match err {
        AppError::Validation(_) => "validation",
        AppError::Infrastructure(_) => "infrastructure",
        AppError::Logic(_) => "logic",
    }
}

/// Log a failed operation and turn it into `None`.
///
/// Nothing past this boundary sees an [`AppError`]: callers only learn that
/// the operation did not complete.
pub fn report<T>(operation: &'static str, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!(
                operation,
                kind = error_kind(&err),
                error = %err.message(),
                "operation failed"
            );
            None
        }
    }
}
