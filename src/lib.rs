//! Libris - In-Memory Library Catalog Manager
//!
//! Tracks books, registered patrons, and active/historical loans for the
//! lifetime of one process run. No persistence, no network: the domain
//! model lives entirely in memory and is driven by a text-menu CLI.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
