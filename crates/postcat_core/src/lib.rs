//! Core domain logic for post/category associations.
//! This crate owns the reconciliation of a post's category set and the
//! listing/removal queries over the join relation.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::page::{
    normalize_page_size, Page, PageRequest, PostSort, PostSortField, SortDirection,
};
pub use model::post::{Post, PostId, PostStatus};
pub use model::post_category::{EntityKind, PostCategory, PostCategoryKey};
pub use repo::entity_lookup::{EntityLookup, SqliteEntityLookup};
pub use repo::post_category_repo::{
    PostCategoryRepository, SqlitePostCategoryRepository, SqliteWriteScope,
};
pub use repo::{RepoError, RepoResult};
pub use service::post_category_service::{
    PostCategoryService, PostCategoryServiceError, ServiceResult,
};
pub use service::reconcile::{diff_category_ids, CategoryDiff};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
