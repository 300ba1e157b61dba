//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract for post/category join records and the
//!   read-only entity lookup contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateKey`,
//!   `EntityNotFound`) in addition to DB transport errors.
//! - SQLite repositories are only constructed over fully migrated connections.

use crate::db::DbError;
use crate::model::post_category::{EntityKind, PostCategoryKey};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entity_lookup;
pub mod post_category_repo;
mod schema;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by join-record storage and entity lookup.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Join record targeted by a delete does not exist.
    NotFound(PostCategoryKey),
    /// Join record targeted by a create already exists.
    DuplicateKey(PostCategoryKey),
    /// Post or category id does not resolve to a stored entity.
    EntityNotFound { kind: EntityKind, id: i64 },
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(key) => write!(f, "post category not found: {key}"),
            Self::DuplicateKey(key) => write!(f, "post category already exists: {key}"),
            Self::EntityNotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
