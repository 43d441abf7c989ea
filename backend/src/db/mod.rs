//! # Review Store
//!
//! Owns the single SQLite connection that backs the `thereviews` table. The
//! connection is opened once at startup and handed to every worker through
//! `web::Data`, so handlers never reach for a global.
//!
//! Opening the store runs `initialize`, which creates the table when missing and
//! inserts the sample review when the table is empty. `reset` drops and rebuilds
//! the table in one transaction and seeds it again.

mod error;
pub mod reviews;

pub use error::{Error, Result};

use log::info;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS thereviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(60) NOT NULL,
    text TEXT NOT NULL,
    rating INTEGER NOT NULL
)";

/// The review inserted whenever the table is found empty.
pub const SEED_TITLE: &str = "Mr. Pumpkin Man";
pub const SEED_TEXT: &str = "This is a pretty bad movie";
pub const SEED_RATING: i64 = 4;

/// Database handle
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create the store at `path`. `:memory:` opens an in-memory store.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        info!("Database connection established at: {}", path.display());
        Self::with_connection(conn)
    }

    /// Create an in-memory store, used by tests
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Ensure the table exists and holds at least the seed review.
    pub fn initialize(&self) -> Result<()> {
        self.conn()?.execute(CREATE_TABLE, [])?;
        self.seed_if_empty()?;
        Ok(())
    }

    /// Insert the sample review when the table has no rows.
    ///
    /// Returns `true` when the seed row was written.
    pub fn seed_if_empty(&self) -> Result<bool> {
        let conn = self.conn()?;
        let seeded = seed_if_empty(&conn)?;
        if seeded {
            info!("Database initialized with sample data!");
        }
        Ok(seeded)
    }

    /// Drop the table, recreate it and seed it again.
    pub fn reset(&self) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute("DROP TABLE IF EXISTS thereviews", [])?;
        tx.execute(CREATE_TABLE, [])?;
        seed_if_empty(&tx)?;
        tx.commit()?;
        info!("Database reset: success!");
        Ok(())
    }

    /// Lock the connection for a single statement or transaction.
    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| Error::LockPoisoned)
    }
}

fn seed_if_empty(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM thereviews", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(false);
    }
    conn.execute(
        "INSERT INTO thereviews (title, text, rating) VALUES (?1, ?2, ?3)",
        params![SEED_TITLE, SEED_TEXT, SEED_RATING],
    )?;
    Ok(true)
}
