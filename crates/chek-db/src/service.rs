//! Service layer hosting every repository method.
//!
//! `ChekService` wraps `ChekDb`. The repos under [`crate::repos`] add their
//! methods through `impl ChekService` blocks.

use crate::ChekDb;
use crate::error::DatabaseError;

pub struct ChekService {
    db: ChekDb,
}

impl ChekService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ChekDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ChekDb`.
    #[must_use]
    pub const fn from_db(db: ChekDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ChekDb {
        &self.db
    }
}
