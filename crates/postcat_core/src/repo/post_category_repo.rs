//! Post/category join-record storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and query `post_categories` rows by either side of the relation.
//! - Provide `SqliteWriteScope`, the caller-owned transaction that service
//!   write operations run through.
//!
//! # Invariants
//! - Reads return rows in insertion order (`rowid ASC`).
//! - `create` reports an existing pair as `RepoError::DuplicateKey`.
//! - `delete` reports a missing pair as `RepoError::NotFound`.
//! - Batched reads never issue one statement per id.

use crate::model::category::CategoryId;
use crate::model::post::PostId;
use crate::model::post_category::{PostCategory, PostCategoryKey};
use crate::repo::schema::{ensure_connection_ready, TableSpec};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{ffi, params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use std::collections::BTreeSet;

const REQUIRED_TABLES: &[TableSpec] = &[(
    "post_categories",
    &["post_id", "category_id", "created_at"],
)];

const POST_CATEGORY_SELECT_SQL: &str = "SELECT
    post_id,
    category_id,
    created_at
FROM post_categories";

// Stays well below SQLite's bound-parameter limit.
const BATCH_CHUNK_SIZE: usize = 500;

/// Storage contract for post/category join records.
pub trait PostCategoryRepository {
    /// Lists records of one post in storage order.
    fn find_by_post_id(&self, post_id: PostId) -> RepoResult<Vec<PostCategory>>;
    /// Lists records of one category in storage order.
    fn find_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<PostCategory>>;
    /// Lists records of all given posts with one batched query.
    fn find_by_post_ids(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostCategory>>;
    /// Inserts one record; fails with `DuplicateKey` if the pair exists.
    fn create(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<PostCategory>;
    /// Deletes one record; fails with `NotFound` if the pair is absent.
    fn delete(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()>;
    /// Deletes every record of one post and returns the deleted count.
    fn delete_all_by_post_id(&self, post_id: PostId) -> RepoResult<usize>;
    /// Deletes every record of one category and returns the deleted count.
    fn delete_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<usize>;
}

impl<T: PostCategoryRepository + ?Sized> PostCategoryRepository for &T {
    fn find_by_post_id(&self, post_id: PostId) -> RepoResult<Vec<PostCategory>> {
        (**self).find_by_post_id(post_id)
    }

    fn find_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<PostCategory>> {
        (**self).find_by_category_id(category_id)
    }

    fn find_by_post_ids(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostCategory>> {
        (**self).find_by_post_ids(post_ids)
    }

    fn create(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<PostCategory> {
        (**self).create(post_id, category_id)
    }

    fn delete(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        (**self).delete(post_id, category_id)
    }

    fn delete_all_by_post_id(&self, post_id: PostId) -> RepoResult<usize> {
        (**self).delete_all_by_post_id(post_id)
    }

    fn delete_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<usize> {
        (**self).delete_all_by_category_id(category_id)
    }
}

/// SQLite-backed join-record repository.
pub struct SqlitePostCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}

impl PostCategoryRepository for SqlitePostCategoryRepository<'_> {
    fn find_by_post_id(&self, post_id: PostId) -> RepoResult<Vec<PostCategory>> {
        query_records(
            self.conn,
            &format!("{POST_CATEGORY_SELECT_SQL} WHERE post_id = ?1 ORDER BY rowid ASC;"),
            vec![Value::Integer(post_id)],
        )
    }

    fn find_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<PostCategory>> {
        query_records(
            self.conn,
            &format!("{POST_CATEGORY_SELECT_SQL} WHERE category_id = ?1 ORDER BY rowid ASC;"),
            vec![Value::Integer(category_id)],
        )
    }

    fn find_by_post_ids(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostCategory>> {
        let unique: Vec<PostId> = post_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut records = Vec::new();
        for chunk in unique.chunks(BATCH_CHUNK_SIZE) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "{POST_CATEGORY_SELECT_SQL} WHERE post_id IN ({placeholders}) ORDER BY rowid ASC;"
            );
            let bind_values = chunk.iter().map(|id| Value::Integer(*id)).collect();
            records.extend(query_records(self.conn, &sql, bind_values)?);
        }

        Ok(records)
    }

    fn create(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<PostCategory> {
        let inserted = self.conn.query_row(
            "INSERT INTO post_categories (post_id, category_id)
             VALUES (?1, ?2)
             RETURNING post_id, category_id, created_at;",
            params![post_id, category_id],
            parse_record_row,
        );

        match inserted {
            Ok(record) => Ok(record),
            Err(err) if is_primary_key_violation(&err) => {
                Err(RepoError::DuplicateKey(PostCategoryKey {
                    post_id,
                    category_id,
                }))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM post_categories WHERE post_id = ?1 AND category_id = ?2;",
            params![post_id, category_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(PostCategoryKey {
                post_id,
                category_id,
            }));
        }

        Ok(())
    }

    fn delete_all_by_post_id(&self, post_id: PostId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM post_categories WHERE post_id = ?1;", [post_id])?;
        Ok(changed)
    }

    fn delete_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "DELETE FROM post_categories WHERE category_id = ?1;",
            [category_id],
        )?;
        Ok(changed)
    }
}

/// Caller-owned write transaction over join records.
///
/// Opened with `BEGIN IMMEDIATE` so the read-diff-write cycle of one
/// reconcile holds the database write lock. Writes become durable only on
/// [`SqliteWriteScope::commit`]; dropping the scope rolls them back.
pub struct SqliteWriteScope<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> SqliteWriteScope<'conn> {
    /// Begins a write scope on a migrated/ready connection.
    ///
    /// Fails when another transaction is already open on `conn`.
    pub fn begin(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        Ok(Self { tx })
    }

    /// Makes all writes issued through this scope durable.
    pub fn commit(self) -> RepoResult<()> {
        self.tx.commit()?;
        Ok(())
    }

    /// Discards all writes issued through this scope.
    pub fn rollback(self) -> RepoResult<()> {
        self.tx.rollback()?;
        Ok(())
    }

    fn repo(&self) -> SqlitePostCategoryRepository<'_> {
        SqlitePostCategoryRepository { conn: &self.tx }
    }
}

impl PostCategoryRepository for SqliteWriteScope<'_> {
    fn find_by_post_id(&self, post_id: PostId) -> RepoResult<Vec<PostCategory>> {
        self.repo().find_by_post_id(post_id)
    }

    fn find_by_category_id(&self, category_id: CategoryId) -> RepoResult<Vec<PostCategory>> {
        self.repo().find_by_category_id(category_id)
    }

    fn find_by_post_ids(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostCategory>> {
        self.repo().find_by_post_ids(post_ids)
    }

    fn create(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<PostCategory> {
        self.repo().create(post_id, category_id)
    }

    fn delete(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        self.repo().delete(post_id, category_id)
    }

    fn delete_all_by_post_id(&self, post_id: PostId) -> RepoResult<usize> {
        self.repo().delete_all_by_post_id(post_id)
    }

    fn delete_all_by_category_id(&self, category_id: CategoryId) -> RepoResult<usize> {
        self.repo().delete_all_by_category_id(category_id)
    }
}

fn query_records(
    conn: &Connection,
    sql: &str,
    bind_values: Vec<Value>,
) -> RepoResult<Vec<PostCategory>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(parse_record_row(row)?);
    }
    Ok(records)
}

fn parse_record_row(row: &Row<'_>) -> rusqlite::Result<PostCategory> {
    Ok(PostCategory {
        post_id: row.get("post_id")?,
        category_id: row.get("category_id")?,
        created_at: row.get("created_at")?,
    })
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
