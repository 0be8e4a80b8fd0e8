use thiserror::Error;

/// Failure taxonomy for the spreadsheet-backed store. Every remote call
/// resolves to one of these; nothing is retried and nothing is fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("permission denied for {resource}; share it with the service account email")]
    PermissionDenied { resource: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("no batch named '{name}' exists in either spreadsheet")]
    BatchNotFound { name: String },

    #[error("a batch named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("spreadsheet service error: {0}")]
    Remote(String),
}

impl StoreError {
    /// Stable code used in IPC error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Auth(_) => "auth_failed",
            StoreError::PermissionDenied { .. } => "permission_denied",
            StoreError::NotFound { .. } => "not_found",
            StoreError::BatchNotFound { .. } => "batch_not_found",
            StoreError::DuplicateName { .. } => "duplicate_name",
            StoreError::Remote(_) => "remote_error",
        }
    }
}
