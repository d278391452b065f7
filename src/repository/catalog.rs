//! Catalog: the collection of all known books

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Store a book. ISBN uniqueness is not enforced; lookups return the
    /// first match in insertion order.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Find a book by ISBN, first match in insertion order.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Set the availability flag of the first matching book.
    pub fn set_availability(&mut self, isbn: &str, available: bool) -> AppResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        book.available = available;
        Ok(())
    }

    /// Remove the first matching book and return it.
    pub fn remove(&mut self, isbn: &str) -> AppResult<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        Ok(self.books.remove(index))
    }

    /// Iterate over all books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
