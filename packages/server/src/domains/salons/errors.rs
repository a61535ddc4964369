use thiserror::Error;

/// Failures surfaced by the salon listing operations
#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Salon not found")]
    NotFound,

    #[error("Invalid salon ID: {0}")]
    InvalidId(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
