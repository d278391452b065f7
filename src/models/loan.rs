//! Loan model and related helpers

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::patron::Patron;

/// One entry in the lending ledger.
///
/// A loan does not own a book or a patron; it carries copies of the
/// identifying fields taken at loan time. Deleting the book or the patron
/// later leaves the record intact: loans are historical facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub isbn: String,
    pub title: String,
    pub patron_id: String,
    pub patron_name: String,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

impl Loan {
    /// Create a loan stamped with the current time, due after `period`.
    pub fn new(book: &Book, patron: &Patron, period: Duration) -> Self {
        let loan_date = Utc::now();
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            patron_id: patron.id.clone(),
            patron_name: patron.name.clone(),
            loan_date,
            due_date: loan_date + period,
            returned_date: None,
        }
    }

    /// True while no return has been recorded.
    pub fn is_outstanding(&self) -> bool {
        self.returned_date.is_none()
    }

    /// True for an outstanding loan past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_outstanding() && now > self.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loan_is_outstanding() {
        let book = Book::new("Dune", "Herbert", "001");
        let patron = Patron::new("P1", "Paul", "paul@arrakis.example");
        let loan = Loan::new(&book, &patron, Duration::days(14));

        assert!(loan.is_outstanding());
        assert_eq!(loan.due_date, loan.loan_date + Duration::days(14));
        assert_eq!(loan.isbn, "001");
        assert_eq!(loan.patron_id, "P1");
    }

    #[test]
    fn test_overdue() {
        let book = Book::new("Dune", "Herbert", "001");
        let patron = Patron::new("P1", "Paul", "paul@arrakis.example");
        let mut loan = Loan::new(&book, &patron, Duration::days(14));

        assert!(!loan.is_overdue(loan.loan_date + Duration::days(7)));
        assert!(loan.is_overdue(loan.loan_date + Duration::days(15)));

        // A returned loan is never overdue, however late.
        loan.returned_date = Some(loan.due_date + Duration::days(30));
        assert!(!loan.is_overdue(loan.due_date + Duration::days(30)));
    }
}
