//! Domain model for posts, categories and their association.
//!
//! # Responsibility
//! - Define the join record owned by storage and the read models resolved
//!   through entity lookup.
//! - Define paging request/response shapes shared by service and storage.
//!
//! # Invariants
//! - Posts and categories are identified by stable integer ids.
//! - A `(post_id, category_id)` pair appears at most once in storage.

pub mod category;
pub mod page;
pub mod post;
pub mod post_category;
