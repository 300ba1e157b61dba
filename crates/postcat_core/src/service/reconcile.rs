//! Category-set reconciliation diff.
//!
//! # Invariants
//! - `to_create` and `to_delete` are disjoint.
//! - Ids present in both the current and desired sets appear in neither.
//! - `write_count()` equals the size of the symmetric difference.

use crate::model::category::CategoryId;
use std::collections::BTreeSet;

/// Writes needed to turn the current category set into the desired one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDiff {
    /// Desired ids missing from storage.
    pub to_create: BTreeSet<CategoryId>,
    /// Stored ids no longer desired.
    pub to_delete: BTreeSet<CategoryId>,
}

impl CategoryDiff {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete.is_empty()
    }

    pub fn write_count(&self) -> usize {
        self.to_create.len() + self.to_delete.len()
    }
}

/// Computes the minimal create/delete sets between `current` and `desired`.
pub fn diff_category_ids(
    current: &BTreeSet<CategoryId>,
    desired: &BTreeSet<CategoryId>,
) -> CategoryDiff {
    CategoryDiff {
        to_create: desired.difference(current).copied().collect(),
        to_delete: current.difference(desired).copied().collect(),
    }
}
