//! Repository layer for card operations.
//!
//! Each method runs exactly one parameterized statement against the pool.
//! The fields on insert/update are `Option` on purpose: the service performs
//! no validation of its own, so absent request fields are bound as SQL NULL
//! and left for the schema to reject.

use crate::domain::Card;
use sqlx::sqlite::SqlitePool;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Fetch every card in the store's natural return order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_cards(&self) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>("SELECT id, card_name, card_pic FROM cards")
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new card and return its database-assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including NULL fields rejected
    /// by the schema.
    pub async fn insert_card(
        &self,
        card_name: Option<&str>,
        card_pic: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO cards (card_name, card_pic) VALUES (?, ?)")
            .bind(card_name)
            .bind(card_pic)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite both fields of the card matching `id`.
    ///
    /// Returns the number of rows affected; a nonexistent id affects zero
    /// rows and is not an error.
    pub async fn update_card(
        &self,
        id: i64,
        card_name: Option<&str>,
        card_pic: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE cards SET card_name = ?, card_pic = ? WHERE id = ?")
            .bind(card_name)
            .bind(card_pic)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete the card matching `id`.
    ///
    /// Returns the number of rows affected; a nonexistent id affects zero
    /// rows and is not an error.
    pub async fn delete_card(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
