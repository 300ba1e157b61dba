//! Post read model.
//!
//! # Invariants
//! - `status` is persisted as `draft|published|recycle`.
//! - `updated_at` is not earlier than `created_at` for rows written by the
//!   owning application; this crate only reads them.

use serde::{Deserialize, Serialize};

/// Stable integer identifier of a post.
pub type PostId = i64;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Not yet visible to readers.
    Draft,
    /// Visible to readers.
    Published,
    /// Moved to the recycle bin.
    Recycle,
}

impl PostStatus {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Recycle => "recycle",
        }
    }

    /// Parses the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "recycle" => Some(Self::Recycle),
            _ => None,
        }
    }
}

/// Post as resolved by entity lookup. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub status: PostStatus,
    pub visits: u64,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}
