use thiserror::Error;

/// Errors raised while transforming the loaded table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the operation cannot run without is absent.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
