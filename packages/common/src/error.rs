use thiserror::Error;

/// Errors surfaced by the persistence collaborator.
///
/// Validation failures carry the user-facing message verbatim; callers
/// are expected to show it and leave their local state untouched so the
/// operation can be retried manually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Category {0} not found")]
    CategoryNotFound(u32),

    #[error("Component {0} not found")]
    ComponentNotFound(u32),
}
