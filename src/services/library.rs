//! Library service: loan/return workflow orchestration
//!
//! Composes the catalog, membership, and lending ledger, and performs the
//! cross-entity validation (existence and availability checks). All
//! operations are synchronous and atomic with respect to the in-memory
//! model: a failed operation makes no state change.

use chrono::Duration;

use crate::{
    config::LoanConfig,
    error::{AppError, AppResult},
    models::{Book, Loan, Patron},
    repository::Repository,
};

pub struct LibraryService {
    repository: Repository,
    loan_period: Duration,
}

impl LibraryService {
    pub fn new(repository: Repository, config: &LoanConfig) -> Self {
        Self {
            repository,
            loan_period: Duration::days(config.period_days),
        }
    }

    /// Register a new book in the catalog, available for loan.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Book {
        let book = Book::new(title, author, isbn);
        tracing::info!("Book added: {} ({})", book.title, book.isbn);
        self.repository.catalog.add(book.clone());
        book
    }

    /// Register a new patron.
    pub fn add_patron(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Patron {
        let patron = Patron::new(id, name, contact);
        tracing::info!("Patron added: {} ({})", patron.name, patron.id);
        self.repository.membership.add(patron.clone());
        patron
    }

    /// Loan a book to a patron.
    ///
    /// Fails with `BookNotFound`, `PatronNotFound`, or `BookUnavailable`;
    /// on failure no loan is created and no availability changes.
    pub fn loan_book(&mut self, isbn: &str, patron_id: &str) -> AppResult<Loan> {
        let book = self
            .repository
            .catalog
            .find_by_isbn(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        let patron = self
            .repository
            .membership
            .find_by_id(patron_id)
            .ok_or_else(|| AppError::PatronNotFound(patron_id.to_string()))?;

        if !book.available {
            return Err(AppError::BookUnavailable(isbn.to_string()));
        }

        let loan = self
            .repository
            .ledger
            .create_loan(book, patron, self.loan_period);
        self.repository.catalog.set_availability(isbn, false)?;

        tracing::info!(
            "Loan created: {} -> {} (due {})",
            loan.isbn,
            loan.patron_id,
            loan.due_date
        );
        Ok(loan)
    }

    /// Return a loaned book.
    ///
    /// Fails with `NoMatchingLoan` when no outstanding loan matches the
    /// pair. The return is recorded even when the book has since been
    /// deleted from the catalog; only the availability update is skipped.
    pub fn return_book(&mut self, isbn: &str, patron_id: &str) -> AppResult<Loan> {
        let loan = self
            .repository
            .ledger
            .mark_returned(isbn, patron_id)
            .ok_or_else(|| AppError::NoMatchingLoan {
                isbn: isbn.to_string(),
                patron_id: patron_id.to_string(),
            })?;

        if self.repository.catalog.set_availability(isbn, true).is_err() {
            tracing::warn!("Returned book {} is no longer in the catalog", isbn);
        }

        tracing::info!("Loan returned: {} <- {}", loan.isbn, loan.patron_id);
        Ok(loan)
    }

    /// Delete a book from the catalog. Loan records referencing it are
    /// kept untouched.
    pub fn delete_book(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self.repository.catalog.remove(isbn)?;
        tracing::info!("Book deleted: {} ({})", book.title, book.isbn);
        Ok(book)
    }

    /// Delete a patron from the membership. Loan records referencing them
    /// are kept untouched.
    pub fn delete_patron(&mut self, id: &str) -> AppResult<Patron> {
        let patron = self.repository.membership.remove(id)?;
        tracing::info!("Patron deleted: {} ({})", patron.name, patron.id);
        Ok(patron)
    }

    pub fn list_books(&self) -> impl Iterator<Item = &Book> {
        self.repository.catalog.iter()
    }

    pub fn list_patrons(&self) -> impl Iterator<Item = &Patron> {
        self.repository.membership.iter()
    }

    pub fn list_loans(&self) -> impl Iterator<Item = &Loan> {
        self.repository.ledger.iter()
    }
}
