//! Post/category join record.
//!
//! # Responsibility
//! - Represent one edge of the post <-> category relation.
//!
//! # Invariants
//! - `(post_id, category_id)` is unique within storage.
//! - `created_at` is assigned by storage on insert and is left untouched by
//!   reconciliation when the pair stays associated.

use crate::model::category::CategoryId;
use crate::model::post::PostId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One stored post-category association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCategory {
    pub post_id: PostId,
    pub category_id: CategoryId,
    /// Insert timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl PostCategory {
    /// Returns the unique key of this record.
    pub fn key(&self) -> PostCategoryKey {
        PostCategoryKey {
            post_id: self.post_id,
            category_id: self.category_id,
        }
    }
}

/// Unique key of a join record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostCategoryKey {
    pub post_id: PostId,
    pub category_id: CategoryId,
}

impl Display for PostCategoryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "post_id={} category_id={}",
            self.post_id, self.category_id
        )
    }
}

/// Entity kinds resolved through lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Category,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Category => write!(f, "category"),
        }
    }
}
