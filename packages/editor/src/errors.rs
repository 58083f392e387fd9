//! Error types for the editor

use snipvault_common::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("No component is selected")]
    NothingSelected,

    #[error("Not in edit mode")]
    NotEditing,

    #[error("Already in edit mode")]
    AlreadyEditing,

    #[error("A save is already in flight")]
    SaveInFlight,

    #[error("No save is in flight")]
    NoSaveInFlight,

    #[error("Save failed: {0}")]
    Store(#[from] StoreError),
}
