//! Membership: the collection of all registered patrons

use crate::{
    error::{AppError, AppResult},
    models::Patron,
};

#[derive(Debug, Default)]
pub struct Membership {
    patrons: Vec<Patron>,
}

impl Membership {
    pub fn add(&mut self, patron: Patron) {
        self.patrons.push(patron);
    }

    /// Find a patron by id, exact string match.
    pub fn find_by_id(&self, id: &str) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.id == id)
    }

    /// Remove the first matching patron and return it.
    pub fn remove(&mut self, id: &str) -> AppResult<Patron> {
        let index = self
            .patrons
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::PatronNotFound(id.to_string()))?;
        Ok(self.patrons.remove(index))
    }

    /// Iterate over all patrons in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Patron> {
        self.patrons.iter()
    }

    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }
}
