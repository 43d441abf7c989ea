//! Review repository: the CRUD operations the route handlers call.
//!
//! Every method runs as its own implicit SQLite transaction and is committed
//! before it returns. Updates and deletes against an unknown id change nothing
//! and report no error.

use super::{Database, Result};
use common::model::review::Review;
use rusqlite::{params, OptionalExtension, Row};

pub struct ReviewRepository<'a> {
    db: &'a Database,
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        title: row.get(1)?,
        text: row.get(2)?,
        rating: row.get(3)?,
    })
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All reviews in primary-key order.
    pub fn list(&self) -> Result<Vec<Review>> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare("SELECT id, title, text, rating FROM thereviews ORDER BY id")?;
        let reviews = stmt
            .query_map([], from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reviews)
    }

    /// The review with `id`, if any. Every id, including 0, is looked up as given.
    pub fn get(&self, id: i64) -> Result<Option<Review>> {
        let conn = self.db.conn()?;
        let review = conn
            .query_row(
                "SELECT id, title, text, rating FROM thereviews WHERE id = ?1",
                params![id],
                from_row,
            )
            .optional()?;
        Ok(review)
    }

    /// Insert a review and return the id the store assigned to it.
    pub fn create(&self, title: &str, text: &str, rating: i64) -> Result<i64> {
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO thereviews (title, text, rating) VALUES (?1, ?2, ?3)",
            params![title, text, rating],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite all three fields of review `id` in one statement.
    ///
    /// Returns `false` when no such review exists.
    pub fn update(&self, id: i64, title: &str, text: &str, rating: i64) -> Result<bool> {
        let changed = self.db.conn()?.execute(
            "UPDATE thereviews SET title = ?1, text = ?2, rating = ?3 WHERE id = ?4",
            params![title, text, rating, id],
        )?;
        Ok(changed > 0)
    }

    /// Remove review `id`. Returns `false` when no such review exists.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .conn()?
            .execute("DELETE FROM thereviews WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .db
            .conn()?
            .query_row("SELECT COUNT(*) FROM thereviews", [], |row| row.get(0))?;
        Ok(count)
    }
}
