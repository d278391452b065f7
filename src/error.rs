//! Error types for Libris

use thiserror::Error;

/// Main application error type
///
/// Every domain failure is returned as a value; no operation aborts the
/// process. A failed operation makes no state change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Book not found: no catalog entry for ISBN {0}")]
    BookNotFound(String),

    #[error("Patron not found: no membership entry for id {0}")]
    PatronNotFound(String),

    #[error("Book not available: ISBN {0} is currently on loan")]
    BookUnavailable(String),

    #[error("No outstanding loan for ISBN {isbn} and patron {patron_id}")]
    NoMatchingLoan { isbn: String, patron_id: String },
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
