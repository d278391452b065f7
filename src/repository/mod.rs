//! In-memory repositories for the domain collections
//!
//! Each collection is the sole owner of its entities, stored by value in
//! insertion order. Every lookup is a linear scan; the dataset is small
//! and lives for one process run only.

pub mod catalog;
pub mod ledger;
pub mod membership;

use self::catalog::Catalog;
use self::ledger::LendingLedger;
use self::membership::Membership;

/// Container for the domain collections
#[derive(Debug, Default)]
pub struct Repository {
    pub catalog: Catalog,
    pub membership: Membership,
    pub ledger: LendingLedger,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
