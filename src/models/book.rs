//! Book model

use serde::{Deserialize, Serialize};

/// A catalog entry. The ISBN is the lookup key; availability is mutated
/// only by the loan and return workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    /// Create a new book, available for loan.
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }
}
