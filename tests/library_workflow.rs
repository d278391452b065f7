//! End-to-end loan/return workflow scenarios

use chrono::Duration;
use libris::{
    config::LoanConfig,
    error::AppError,
    repository::Repository,
    services::LibraryService,
};

fn service() -> LibraryService {
    LibraryService::new(Repository::new(), &LoanConfig::default())
}

#[test]
fn test_loan_return_loan_cycle() {
    let mut library = service();
    library.add_book("Dune", "Herbert", "001");
    library.add_patron("P1", "Paul", "paul@arrakis.example");
    library.add_patron("P2", "Chani", "chani@arrakis.example");

    // P1 borrows the only copy
    let loan = library.loan_book("001", "P1").unwrap();
    assert_eq!(loan.due_date, loan.loan_date + Duration::days(14));
    assert!(!library.list_books().next().unwrap().available);

    // P2 cannot borrow it while it is out
    assert_eq!(
        library.loan_book("001", "P2").unwrap_err(),
        AppError::BookUnavailable("001".to_string())
    );

    // P1 returns it; the book is available again
    library.return_book("001", "P1").unwrap();
    assert!(library.list_books().next().unwrap().available);

    // now P2 can borrow it
    library.loan_book("001", "P2").unwrap();
    assert!(!library.list_books().next().unwrap().available);

    // two historical entries, one outstanding
    assert_eq!(library.list_loans().count(), 2);
    assert_eq!(
        library.list_loans().filter(|l| l.is_outstanding()).count(),
        1
    );
}

#[test]
fn test_loan_unknown_isbn_creates_nothing() {
    let mut library = service();
    library.add_patron("P1", "Paul", "paul@arrakis.example");

    assert_eq!(
        library.loan_book("999", "P1").unwrap_err(),
        AppError::BookNotFound("999".to_string())
    );
    assert_eq!(library.list_loans().count(), 0);
}

#[test]
fn test_return_without_matching_loan() {
    let mut library = service();
    library.add_book("Dune", "Herbert", "001");
    library.add_patron("P1", "Paul", "paul@arrakis.example");
    library.loan_book("001", "P1").unwrap();

    assert_eq!(
        library.return_book("001", "P9").unwrap_err(),
        AppError::NoMatchingLoan {
            isbn: "001".to_string(),
            patron_id: "P9".to_string(),
        }
    );
    // the outstanding loan for P1 is untouched
    assert!(library.list_loans().next().unwrap().is_outstanding());
}

#[test]
fn test_loans_survive_deletion() {
    let mut library = service();
    library.add_book("Dune", "Herbert", "001");
    library.add_patron("P1", "Paul", "paul@arrakis.example");
    library.loan_book("001", "P1").unwrap();

    library.delete_book("001").unwrap();
    library.delete_patron("P1").unwrap();

    // the ledger still records the loan, and the return still lands
    assert_eq!(library.list_loans().count(), 1);
    let returned = library.return_book("001", "P1").unwrap();
    assert!(returned.returned_date.is_some());
}

#[test]
fn test_custom_loan_period() {
    let config = LoanConfig { period_days: 7 };
    let mut library = LibraryService::new(Repository::new(), &config);
    library.add_book("Dune", "Herbert", "001");
    library.add_patron("P1", "Paul", "paul@arrakis.example");

    let loan = library.loan_book("001", "P1").unwrap();
    assert_eq!(loan.due_date, loan.loan_date + Duration::days(7));
}
