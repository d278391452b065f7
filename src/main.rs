//! Libris - In-Memory Library Catalog Manager
//!
//! Text-menu front end over the library service. This layer only reads
//! lines, maps them to service calls, and renders the results; all domain
//! decisions live in the service.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    config::AppConfig,
    error::AppError,
    models::{Book, Loan, Patron},
    repository::Repository,
    services::LibraryService,
};

const MENU: &str = "\nLibrary Catalog Menu:\n\
    1. Add book\n\
    2. Add patron\n\
    3. Loan book\n\
    4. Return book\n\
    5. List books\n\
    6. List patrons\n\
    7. List loans\n\
    8. Delete book\n\
    9. Delete patron\n\
    0. Exit";

const SEPARATOR: &str = "-------------------------";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    let service = LibraryService::new(Repository::new(), &config.loans);

    let stdin = io::stdin();
    run(service, &mut stdin.lock())?;
    Ok(())
}

/// Menu loop: prompt, dispatch, render, repeat until exit.
fn run(mut service: LibraryService, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        println!("{}", MENU);
        let line = prompt(input, "Enter your choice: ")?;

        let choice: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        match choice {
            1 => {
                let title = prompt(input, "Enter title: ")?;
                let author = prompt(input, "Enter author: ")?;
                let isbn = prompt(input, "Enter ISBN: ")?;
                service.add_book(title, author, isbn);
                println!("Book added successfully.");
            }
            2 => {
                let id = prompt(input, "Enter patron id: ")?;
                let name = prompt(input, "Enter name: ")?;
                let contact = prompt(input, "Enter contact info: ")?;
                service.add_patron(id, name, contact);
                println!("Patron added successfully.");
            }
            3 => {
                let isbn = prompt(input, "Enter ISBN of the book: ")?;
                let patron_id = prompt(input, "Enter patron id: ")?;
                match service.loan_book(&isbn, &patron_id) {
                    Ok(loan) => println!(
                        "Book loaned successfully. Due {}.",
                        format_date(loan.due_date)
                    ),
                    Err(e) => println!("Loan failed: {}", render_error(&e)),
                }
            }
            4 => {
                let isbn = prompt(input, "Enter ISBN of the book: ")?;
                let patron_id = prompt(input, "Enter patron id: ")?;
                match service.return_book(&isbn, &patron_id) {
                    Ok(_) => println!("Book returned successfully."),
                    Err(e) => println!("Return failed: {}", render_error(&e)),
                }
            }
            5 => {
                println!("Books in catalog:");
                for book in service.list_books() {
                    print_book(book);
                    println!("{}", SEPARATOR);
                }
            }
            6 => {
                println!("Registered patrons:");
                for patron in service.list_patrons() {
                    print_patron(patron);
                    println!("{}", SEPARATOR);
                }
            }
            7 => {
                println!("Loan history:");
                let now = Utc::now();
                for loan in service.list_loans() {
                    print_loan(loan, now);
                    println!("{}", SEPARATOR);
                }
            }
            8 => {
                let isbn = prompt(input, "Enter ISBN of the book to delete: ")?;
                match service.delete_book(&isbn) {
                    Ok(_) => println!("Book deleted successfully."),
                    Err(e) => println!("Delete failed: {}", render_error(&e)),
                }
            }
            9 => {
                let id = prompt(input, "Enter patron id to delete: ")?;
                match service.delete_patron(&id) {
                    Ok(_) => println!("Patron deleted successfully."),
                    Err(e) => println!("Delete failed: {}", render_error(&e)),
                }
            }
            0 => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Print a prompt and read one trimmed line.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// User-facing message for each service error kind.
fn render_error(error: &AppError) -> String {
    match error {
        AppError::BookNotFound(isbn) => format!("no book with ISBN {}.", isbn),
        AppError::PatronNotFound(id) => format!("no patron with id {}.", id),
        AppError::BookUnavailable(isbn) => {
            format!("book {} is currently on loan.", isbn)
        }
        AppError::NoMatchingLoan { isbn, patron_id } => format!(
            "no outstanding loan for ISBN {} and patron {}.",
            isbn, patron_id
        ),
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn print_book(book: &Book) {
    println!("Title: {}", book.title);
    println!("Author: {}", book.author);
    println!("ISBN: {}", book.isbn);
    println!("Available: {}", if book.available { "Yes" } else { "No" });
}

fn print_patron(patron: &Patron) {
    println!("Patron id: {}", patron.id);
    println!("Name: {}", patron.name);
    println!("Contact: {}", patron.contact);
}

fn print_loan(loan: &Loan, now: DateTime<Utc>) {
    println!("ISBN: {} ({})", loan.isbn, loan.title);
    println!("Patron: {} ({})", loan.patron_id, loan.patron_name);
    println!("Loan date: {}", format_date(loan.loan_date));
    println!(
        "Due date: {}{}",
        format_date(loan.due_date),
        if loan.is_overdue(now) { " (overdue)" } else { "" }
    );
    match loan.returned_date {
        Some(date) => println!("Return date: {}", format_date(date)),
        None => println!("Return date: Not returned yet"),
    }
}
