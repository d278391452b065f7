//! Data models for Libris

pub mod book;
pub mod loan;
pub mod patron;

// Re-export commonly used types
pub use book::Book;
pub use loan::Loan;
pub use patron::Patron;
