//! Read-only post/category lookup contract and SQLite implementation.
//!
//! # Responsibility
//! - Resolve post and category ids referenced by join records.
//! - Sort and slice a set of post ids for paged listings.
//!
//! # Invariants
//! - Lookups never mutate posts or categories.
//! - Unknown ids are reported as `RepoError::EntityNotFound`.
//! - Paged ordering breaks ties by `id` in the requested direction.

use crate::model::category::{Category, CategoryId};
use crate::model::page::PageRequest;
use crate::model::post::{Post, PostId, PostStatus};
use crate::model::post_category::EntityKind;
use crate::repo::schema::{ensure_connection_ready, TableSpec};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const REQUIRED_TABLES: &[TableSpec] = &[
    (
        "categories",
        &["id", "name", "slug", "description", "created_at"],
    ),
    (
        "posts",
        &[
            "id",
            "title",
            "slug",
            "status",
            "visits",
            "created_at",
            "updated_at",
        ],
    ),
];

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    slug,
    status,
    visits,
    created_at,
    updated_at
FROM posts";

/// Read-only provider of posts and categories by id.
pub trait EntityLookup {
    /// Resolves one category; fails with `EntityNotFound` if absent.
    fn get_category(&self, id: CategoryId) -> RepoResult<Category>;
    /// Resolves one post; fails with `EntityNotFound` if absent.
    fn get_post(&self, id: PostId) -> RepoResult<Post>;
    /// Counts how many of `ids` have a stored post.
    fn count_posts(&self, ids: &[PostId]) -> RepoResult<usize>;
    /// Returns the posts among `ids` that fall on the requested page.
    ///
    /// Ids without a stored post are skipped; use `count_posts` to detect them.
    fn page_posts(&self, ids: &[PostId], request: &PageRequest) -> RepoResult<Vec<Post>>;
}

/// SQLite-backed entity lookup.
pub struct SqliteEntityLookup<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntityLookup<'conn> {
    /// Constructs a lookup from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}

impl EntityLookup for SqliteEntityLookup<'_> {
    fn get_category(&self, id: CategoryId) -> RepoResult<Category> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name, slug, description, created_at
                 FROM categories
                 WHERE id = ?1;",
                [id],
                |row| {
                    Ok(Category {
                        id: row.get("id")?,
                        name: row.get("name")?,
                        slug: row.get("slug")?,
                        description: row.get("description")?,
                        created_at: row.get("created_at")?,
                    })
                },
            )
            .optional()?;

        category.ok_or(RepoError::EntityNotFound {
            kind: EntityKind::Category,
            id,
        })
    }

    fn get_post(&self, id: PostId) -> RepoResult<Post> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return parse_post_row(row);
        }

        Err(RepoError::EntityNotFound {
            kind: EntityKind::Post,
            id,
        })
    }

    fn count_posts(&self, ids: &[PostId]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM posts WHERE id IN (SELECT value FROM json_each(?1));",
            [id_array(ids)],
            |row| row.get(0),
        )?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid post count `{count}`")))
    }

    fn page_posts(&self, ids: &[PostId], request: &PageRequest) -> RepoResult<Vec<Post>> {
        if ids.is_empty() || request.size == 0 {
            return Ok(Vec::new());
        }

        let sort = request.sort_or_default();
        let direction = sort.direction.keyword();
        let ids_json = id_array(ids);
        let sql = format!(
            "{POST_SELECT_SQL}
             WHERE id IN (SELECT value FROM json_each(?1))
             ORDER BY {column} {direction}, id {direction}
             LIMIT ?2 OFFSET ?3;",
            column = sort.field.column(),
        );
        let offset = i64::try_from(request.offset()).map_err(|_| {
            RepoError::InvalidData(format!("page offset {} out of range", request.offset()))
        })?;

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![ids_json, i64::from(request.size), offset])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }
}

// One JSON array parameter keeps the statement single regardless of id count.
fn id_array(ids: &[PostId]) -> String {
    format!(
        "[{}]",
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    )
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id: PostId = row.get("id")?;

    let status_text: String = row.get("status")?;
    let status = PostStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid post status `{status_text}` in posts.status"))
    })?;

    let visits_raw: i64 = row.get("visits")?;
    let visits = u64::try_from(visits_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid visits value `{visits_raw}` in posts.visits for post {id}"
        ))
    })?;

    Ok(Post {
        id,
        title: row.get("title")?,
        slug: row.get("slug")?,
        status,
        visits,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
