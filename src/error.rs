//! Error types for menutree
//!
//! Each layer has its own `thiserror` enum; `MenuError` collects them for
//! callers of the library API.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::services::FetchError;

/// Result type alias for menutree operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menutree operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Menu name unresolved or store failure during a fetch
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Store could not be opened or loaded
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// True when the menu name matched zero or several menus.
    pub fn is_menu_unresolved(&self) -> bool {
        matches!(
            self,
            MenuError::Fetch(FetchError::AmbiguousOrMissingMenu { .. })
        )
    }
}
