//! Lending ledger: the append-only history of loan records
//!
//! Records are never deleted. Marking a loan returned is the only
//! mutation a record ever sees.

use chrono::{Duration, Utc};

use crate::models::{Book, Loan, Patron};

#[derive(Debug, Default)]
pub struct LendingLedger {
    loans: Vec<Loan>,
}

impl LendingLedger {
    /// Append a new loan stamped with the current time, due after
    /// `period`. The caller has already verified that the book exists,
    /// is available, and that the patron exists.
    pub fn create_loan(&mut self, book: &Book, patron: &Patron, period: Duration) -> Loan {
        let loan = Loan::new(book, patron, period);
        self.loans.push(loan.clone());
        loan
    }

    /// Find the first outstanding loan matching both identifiers.
    pub fn find_outstanding(&self, isbn: &str, patron_id: &str) -> Option<&Loan> {
        self.loans
            .iter()
            .find(|l| l.isbn == isbn && l.patron_id == patron_id && l.is_outstanding())
    }

    /// Stamp the first matching outstanding loan with the current time
    /// and return a copy of it, or `None` when no loan matches.
    pub fn mark_returned(&mut self, isbn: &str, patron_id: &str) -> Option<Loan> {
        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.isbn == isbn && l.patron_id == patron_id && l.is_outstanding())?;
        loan.returned_date = Some(Utc::now());
        Some(loan.clone())
    }

    /// Iterate over all historical records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// Number of loans not yet returned.
    pub fn outstanding_count(&self) -> usize {
        self.loans.iter().filter(|l| l.is_outstanding()).count()
    }
}
