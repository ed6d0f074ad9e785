//! Domain types for the card service.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted card: a database-assigned id, a name, and a picture reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub card_name: String,
    pub card_pic: String,
}
