//! Patron (registered library user) model

use serde::{Deserialize, Serialize};

/// A registered patron. Identifiers are strings so alphanumeric card
/// numbers work; equality on `id` is exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub id: String,
    pub name: String,
    pub contact: String,
}

impl Patron {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}
