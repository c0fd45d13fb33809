//! Favorite (bookmark) model.

use castboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub casting_call_id: DbId,
    pub created_at: Timestamp,
}

/// Result of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoriteToggle {
    pub casting_call_id: DbId,
    /// `true` when the casting call is now a favorite.
    pub favorited: bool,
}
