//! Category read model.

use serde::{Deserialize, Serialize};

/// Stable integer identifier of a category.
pub type CategoryId = i64;

/// Category as resolved by entity lookup. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe unique name.
    pub slug: String,
    pub description: Option<String>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}
