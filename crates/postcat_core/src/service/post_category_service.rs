//! Post/category association use-case service.
//!
//! # Responsibility
//! - List categories of posts and posts of categories, resolved through
//!   entity lookup, including batched and paged variants.
//! - Reconcile the stored category set of a post with a desired set using the
//!   minimal number of creates and deletes.
//! - Remove all associations of one post or one category.
//!
//! # Invariants
//! - The service holds no state between calls; every write operation runs
//!   through the caller's write scope, which decides commit or rollback.
//! - Ids present in both the stored and desired sets are never rewritten.
//! - A join record whose post or category cannot be resolved is reported as
//!   `PostCategoryServiceError::Lookup`, never skipped.

use crate::model::category::{Category, CategoryId};
use crate::model::page::{Page, PageRequest};
use crate::model::post::{Post, PostId};
use crate::model::post_category::{EntityKind, PostCategory};
use crate::repo::entity_lookup::EntityLookup;
use crate::repo::post_category_repo::PostCategoryRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::reconcile::diff_category_ids;
use log::{error, info, warn};
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for post/category use-cases.
#[derive(Debug)]
pub enum PostCategoryServiceError {
    /// A stored join record references an entity lookup cannot resolve.
    Lookup { kind: EntityKind, id: i64 },
    /// Page request is not usable (zero page size).
    InvalidPageRequest(String),
    /// Storage and lookup disagree in a way no single id explains.
    InconsistentState(&'static str),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PostCategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup { kind, id } => {
                write!(f, "post category references unknown {kind}: {id}")
            }
            Self::InvalidPageRequest(details) => write!(f, "invalid page request: {details}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent post category state: {details}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PostCategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PostCategoryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::EntityNotFound { kind, id } => Self::Lookup { kind, id },
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, PostCategoryServiceError>;

/// Post/category association service over storage and lookup implementations.
pub struct PostCategoryService<R: PostCategoryRepository, L: EntityLookup> {
    repo: R,
    lookup: L,
}

impl<R: PostCategoryRepository, L: EntityLookup> PostCategoryService<R, L> {
    /// Creates a service reading through `repo` and resolving through `lookup`.
    pub fn new(repo: R, lookup: L) -> Self {
        Self { repo, lookup }
    }

    /// Lists the categories of one post in storage order.
    pub fn list_categories_for_post(&self, post_id: PostId) -> ServiceResult<Vec<Category>> {
        self.repo
            .find_by_post_id(post_id)?
            .iter()
            .map(|record| self.resolve_category(record.category_id))
            .collect()
    }

    /// Lists categories for many posts with a single storage read.
    ///
    /// `None` and an empty slice both yield an empty map. Posts without any
    /// category are absent from the map.
    pub fn list_category_map_for_posts(
        &self,
        post_ids: Option<&[PostId]>,
    ) -> ServiceResult<HashMap<PostId, Vec<Category>>> {
        let post_ids = match post_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => return Ok(HashMap::new()),
        };

        let records = self.repo.find_by_post_ids(post_ids)?;
        let mut resolved: HashMap<CategoryId, Category> = HashMap::new();
        let mut map: HashMap<PostId, Vec<Category>> = HashMap::new();
        for record in records {
            let category = match resolved.get(&record.category_id) {
                Some(category) => category.clone(),
                None => {
                    let category = self.resolve_category(record.category_id)?;
                    resolved.insert(record.category_id, category.clone());
                    category
                }
            };
            map.entry(record.post_id).or_default().push(category);
        }

        Ok(map)
    }

    /// Lists the posts of one category in storage order.
    pub fn list_posts_for_category(&self, category_id: CategoryId) -> ServiceResult<Vec<Post>> {
        self.repo
            .find_by_category_id(category_id)?
            .iter()
            .map(|record| self.resolve_post(record.post_id))
            .collect()
    }

    /// Pages the posts of one category.
    ///
    /// `total_elements` counts every post linked to the category at query
    /// time, regardless of the requested page. Any linked post that cannot be
    /// resolved fails the call, whichever page it would fall on.
    pub fn page_posts_for_category(
        &self,
        category_id: CategoryId,
        request: &PageRequest,
    ) -> ServiceResult<Page<Post>> {
        if request.size == 0 {
            return Err(PostCategoryServiceError::InvalidPageRequest(
                "page size must be greater than zero".to_string(),
            ));
        }

        let post_ids: Vec<PostId> = self
            .repo
            .find_by_category_id(category_id)?
            .into_iter()
            .map(|record| record.post_id)
            .collect();
        if self.lookup.count_posts(&post_ids)? < post_ids.len() {
            return Err(self.find_dangling_post(&post_ids));
        }

        let total = post_ids.len() as u64;
        let expected_len = request.expected_len(total);
        if expected_len == 0 {
            return Ok(Page::new(Vec::new(), request, total));
        }

        let posts = self.lookup.page_posts(&post_ids, request)?;
        if posts.len() < expected_len {
            return Err(self.find_dangling_post(&post_ids));
        }

        Ok(Page::new(posts, request, total))
    }

    /// Brings the stored categories of `post_id` in line with `desired`.
    ///
    /// `None` means the empty set. Reads and writes go through `scope`;
    /// the caller commits it on success or drops it to roll back. Writes
    /// issued before a failure stay pending in the scope.
    ///
    /// A create that hits an existing pair, or a delete that finds the pair
    /// already gone, means a concurrent writer got there first and is not an
    /// error.
    ///
    /// Returns the post's records after the diff is applied.
    pub fn reconcile<S: PostCategoryRepository>(
        &self,
        scope: &S,
        post_id: PostId,
        desired: Option<&BTreeSet<CategoryId>>,
    ) -> ServiceResult<Vec<PostCategory>> {
        let started_at = Instant::now();
        let empty = BTreeSet::new();
        let desired = desired.unwrap_or(&empty);

        let result = apply_category_diff(scope, post_id, desired);
        match &result {
            Ok((created, deleted)) => info!(
                "event=reconcile module=service status=ok post_id={post_id} desired={} created={created} deleted={deleted} duration_ms={}",
                desired.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=reconcile module=service status=error post_id={post_id} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result?;

        Ok(scope.find_by_post_id(post_id)?)
    }

    /// Deletes every association of one post and returns the deleted records.
    pub fn remove_by_post<S: PostCategoryRepository>(
        &self,
        scope: &S,
        post_id: PostId,
    ) -> ServiceResult<Vec<PostCategory>> {
        let records = scope.find_by_post_id(post_id)?;
        if records.is_empty() {
            return Ok(records);
        }

        let deleted = scope.delete_all_by_post_id(post_id)?;
        if deleted != records.len() {
            warn!(
                "event=remove_by_post module=service status=mismatch post_id={post_id} read={} deleted={deleted}",
                records.len()
            );
        }
        info!("event=remove_by_post module=service status=ok post_id={post_id} deleted={deleted}");
        Ok(records)
    }

    /// Deletes every association of one category and returns the deleted records.
    pub fn remove_by_category<S: PostCategoryRepository>(
        &self,
        scope: &S,
        category_id: CategoryId,
    ) -> ServiceResult<Vec<PostCategory>> {
        let records = scope.find_by_category_id(category_id)?;
        if records.is_empty() {
            return Ok(records);
        }

        let deleted = scope.delete_all_by_category_id(category_id)?;
        if deleted != records.len() {
            warn!(
                "event=remove_by_category module=service status=mismatch category_id={category_id} read={} deleted={deleted}",
                records.len()
            );
        }
        info!(
            "event=remove_by_category module=service status=ok category_id={category_id} deleted={deleted}"
        );
        Ok(records)
    }

    /// Returns the category ids linked to one post.
    pub fn list_category_ids_for_post(
        &self,
        post_id: PostId,
    ) -> ServiceResult<BTreeSet<CategoryId>> {
        Ok(self
            .repo
            .find_by_post_id(post_id)?
            .into_iter()
            .map(|record| record.category_id)
            .collect())
    }

    /// Lists raw join records of one post.
    pub fn list_by_post_id(&self, post_id: PostId) -> ServiceResult<Vec<PostCategory>> {
        Ok(self.repo.find_by_post_id(post_id)?)
    }

    /// Lists raw join records of one category.
    pub fn list_by_category_id(&self, category_id: CategoryId) -> ServiceResult<Vec<PostCategory>> {
        Ok(self.repo.find_by_category_id(category_id)?)
    }

    fn resolve_category(&self, id: CategoryId) -> ServiceResult<Category> {
        Ok(self.lookup.get_category(id)?)
    }

    fn resolve_post(&self, id: PostId) -> ServiceResult<Post> {
        Ok(self.lookup.get_post(id)?)
    }

    fn find_dangling_post(&self, post_ids: &[PostId]) -> PostCategoryServiceError {
        for post_id in post_ids {
            match self.lookup.get_post(*post_id) {
                Ok(_) => continue,
                Err(err) => return err.into(),
            }
        }
        PostCategoryServiceError::InconsistentState("paged post lookup missed a linked post")
    }
}

/// Applies the diff for one post and returns `(created, deleted)` counts.
fn apply_category_diff<S: PostCategoryRepository>(
    scope: &S,
    post_id: PostId,
    desired: &BTreeSet<CategoryId>,
) -> RepoResult<(usize, usize)> {
    let current: BTreeSet<CategoryId> = scope
        .find_by_post_id(post_id)?
        .into_iter()
        .map(|record| record.category_id)
        .collect();
    let diff = diff_category_ids(&current, desired);

    let mut created = 0;
    for category_id in &diff.to_create {
        match scope.create(post_id, *category_id) {
            Ok(_) => created += 1,
            Err(RepoError::DuplicateKey(key)) => {
                warn!("event=reconcile module=service status=already_present {key}");
            }
            Err(err) => return Err(err),
        }
    }

    let mut deleted = 0;
    for category_id in &diff.to_delete {
        match scope.delete(post_id, *category_id) {
            Ok(()) => deleted += 1,
            Err(RepoError::NotFound(key)) => {
                warn!("event=reconcile module=service status=already_absent {key}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok((created, deleted))
}

#[cfg(test)]
mod tests {
    use super::{PostCategoryService, PostCategoryServiceError, ServiceResult};
    use crate::model::category::Category;
    use crate::model::page::PageRequest;
    use crate::model::post::{Post, PostStatus};
    use crate::model::post_category::{EntityKind, PostCategory, PostCategoryKey};
    use crate::repo::entity_lookup::EntityLookup;
    use crate::repo::post_category_repo::PostCategoryRepository;
    use crate::repo::{RepoError, RepoResult};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;

    /// In-memory store that counts statements and can simulate racing writers.
    #[derive(Default)]
    struct MemoryStore {
        rows: RefCell<Vec<PostCategory>>,
        reads: Cell<usize>,
        creates: Cell<usize>,
        deletes: Cell<usize>,
        // Category ids a concurrent writer links just before our create.
        racing_creates: RefCell<BTreeSet<i64>>,
        // Category ids a concurrent writer unlinks just before our delete.
        racing_deletes: RefCell<BTreeSet<i64>>,
        fail_create_for: Cell<Option<i64>>,
    }

    impl MemoryStore {
        fn with_rows(pairs: &[(i64, i64)]) -> Self {
            let store = Self::default();
            for (idx, (post_id, category_id)) in pairs.iter().enumerate() {
                store.rows.borrow_mut().push(PostCategory {
                    post_id: *post_id,
                    category_id: *category_id,
                    created_at: idx as i64,
                });
            }
            store
        }

        fn writes(&self) -> usize {
            self.creates.get() + self.deletes.get()
        }

        fn select(&self, predicate: impl Fn(&PostCategory) -> bool) -> Vec<PostCategory> {
            self.reads.set(self.reads.get() + 1);
            self.rows
                .borrow()
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect()
        }

        fn remove_where(&self, predicate: impl Fn(&PostCategory) -> bool) -> usize {
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|row| !predicate(row));
            before - rows.len()
        }
    }

    impl PostCategoryRepository for MemoryStore {
        fn find_by_post_id(&self, post_id: i64) -> RepoResult<Vec<PostCategory>> {
            Ok(self.select(|row| row.post_id == post_id))
        }

        fn find_by_category_id(&self, category_id: i64) -> RepoResult<Vec<PostCategory>> {
            Ok(self.select(|row| row.category_id == category_id))
        }

        fn find_by_post_ids(&self, post_ids: &[i64]) -> RepoResult<Vec<PostCategory>> {
            Ok(self.select(|row| post_ids.contains(&row.post_id)))
        }

        fn create(&self, post_id: i64, category_id: i64) -> RepoResult<PostCategory> {
            self.creates.set(self.creates.get() + 1);
            if self.fail_create_for.get() == Some(category_id) {
                return Err(RepoError::InvalidData("disk full".to_string()));
            }
            let key = PostCategoryKey {
                post_id,
                category_id,
            };
            if self.racing_creates.borrow_mut().remove(&category_id) {
                self.rows.borrow_mut().push(PostCategory {
                    post_id,
                    category_id,
                    created_at: -1,
                });
            }
            if self.rows.borrow().iter().any(|row| row.key() == key) {
                return Err(RepoError::DuplicateKey(key));
            }
            let record = PostCategory {
                post_id,
                category_id,
                created_at: 1_000,
            };
            self.rows.borrow_mut().push(record.clone());
            Ok(record)
        }

        fn delete(&self, post_id: i64, category_id: i64) -> RepoResult<()> {
            self.deletes.set(self.deletes.get() + 1);
            let matches = |row: &PostCategory| {
                row.post_id == post_id && row.category_id == category_id
            };
            if self.racing_deletes.borrow_mut().remove(&category_id) {
                self.remove_where(matches);
            }
            match self.remove_where(matches) {
                0 => Err(RepoError::NotFound(PostCategoryKey {
                    post_id,
                    category_id,
                })),
                _ => Ok(()),
            }
        }

        fn delete_all_by_post_id(&self, post_id: i64) -> RepoResult<usize> {
            Ok(self.remove_where(|row| row.post_id == post_id))
        }

        fn delete_all_by_category_id(&self, category_id: i64) -> RepoResult<usize> {
            Ok(self.remove_where(|row| row.category_id == category_id))
        }
    }

    /// Lookup that knows categories 1..=99 and posts 1..=99.
    struct RangeLookup {
        category_calls: Cell<usize>,
    }

    impl RangeLookup {
        fn new() -> Self {
            Self {
                category_calls: Cell::new(0),
            }
        }
    }

    impl EntityLookup for RangeLookup {
        fn get_category(&self, id: i64) -> RepoResult<Category> {
            self.category_calls.set(self.category_calls.get() + 1);
            if !(1..100).contains(&id) {
                return Err(RepoError::EntityNotFound {
                    kind: EntityKind::Category,
                    id,
                });
            }
            Ok(Category {
                id,
                name: format!("category {id}"),
                slug: format!("category-{id}"),
                description: None,
                created_at: 0,
            })
        }

        fn get_post(&self, id: i64) -> RepoResult<Post> {
            if !(1..100).contains(&id) {
                return Err(RepoError::EntityNotFound {
                    kind: EntityKind::Post,
                    id,
                });
            }
            Ok(Post {
                id,
                title: format!("post {id}"),
                slug: format!("post-{id}"),
                status: PostStatus::Published,
                visits: 0,
                created_at: id,
                updated_at: id,
            })
        }

        fn count_posts(&self, ids: &[i64]) -> RepoResult<usize> {
            Ok(ids.iter().filter(|id| (1..100).contains(*id)).count())
        }

        fn page_posts(&self, ids: &[i64], request: &PageRequest) -> RepoResult<Vec<Post>> {
            let mut known: Vec<i64> = ids
                .iter()
                .copied()
                .filter(|id| (1..100).contains(id))
                .collect();
            known.sort_unstable_by(|a, b| b.cmp(a));
            known
                .into_iter()
                .skip(request.offset() as usize)
                .take(request.size as usize)
                .map(|id| self.get_post(id))
                .collect()
        }
    }

    fn ids(values: &[i64]) -> BTreeSet<i64> {
        values.iter().copied().collect()
    }

    fn category_ids(records: &[PostCategory]) -> BTreeSet<i64> {
        records.iter().map(|record| record.category_id).collect()
    }

    #[test]
    fn reconcile_applies_minimal_diff() {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 20)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let result = service.reconcile(&store, 1, Some(&ids(&[20, 30]))).unwrap();

        assert_eq!(category_ids(&result), ids(&[20, 30]));
        assert_eq!(store.creates.get(), 1);
        assert_eq!(store.deletes.get(), 1);
    }

    #[test]
    fn reconcile_twice_issues_no_writes_the_second_time() {
        let store = MemoryStore::with_rows(&[(1, 10)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());
        let desired = ids(&[10, 11, 12]);

        let first = service.reconcile(&store, 1, Some(&desired)).unwrap();
        let writes_after_first = store.writes();
        let second = service.reconcile(&store, 1, Some(&desired)).unwrap();

        assert_eq!(writes_after_first, 2);
        assert_eq!(store.writes(), writes_after_first);
        assert_eq!(first, second);
    }

    #[test]
    fn reconcile_keeps_records_present_in_both_sets() {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 20)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let result = service.reconcile(&store, 1, Some(&ids(&[10, 20, 30]))).unwrap();

        let kept = result.iter().find(|r| r.category_id == 20).unwrap();
        assert_eq!(kept.created_at, 1);
    }

    #[test]
    fn reconcile_with_absent_set_removes_everything() {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 20), (2, 10)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let result = service.reconcile(&store, 1, None).unwrap();

        assert!(result.is_empty());
        assert_eq!(store.deletes.get(), 2);
        assert_eq!(service.list_category_ids_for_post(2).unwrap(), ids(&[10]));
    }

    #[test]
    fn reconcile_empty_post_to_empty_set_writes_nothing() {
        let store = MemoryStore::default();
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let result = service.reconcile(&store, 2, Some(&BTreeSet::new())).unwrap();

        assert!(result.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn reconcile_treats_racing_duplicate_and_missing_rows_as_satisfied() {
        let store = MemoryStore::with_rows(&[(1, 10)]);
        store.racing_creates.borrow_mut().insert(30);
        store.racing_deletes.borrow_mut().insert(10);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let result = service.reconcile(&store, 1, Some(&ids(&[30]))).unwrap();

        assert_eq!(category_ids(&result), ids(&[30]));
    }

    #[test]
    fn reconcile_stops_at_first_unrecoverable_error() {
        let store = MemoryStore::default();
        store.fail_create_for.set(Some(2));
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let err = service
            .reconcile(&store, 1, Some(&ids(&[1, 2, 3])))
            .unwrap_err();

        assert!(matches!(
            err,
            PostCategoryServiceError::Repo(RepoError::InvalidData(_))
        ));
        // Ids are applied in ascending order; the prefix before the failure stays.
        assert_eq!(service.list_category_ids_for_post(1).unwrap(), ids(&[1]));
        assert_eq!(store.creates.get(), 2);
    }

    #[test]
    fn category_map_uses_one_storage_read_and_resolves_each_category_once() {
        let store = MemoryStore::with_rows(&[(1, 10), (2, 10), (2, 20), (3, 30)]);
        let lookup = RangeLookup::new();
        let service = PostCategoryService::new(&store, lookup);

        let map = service
            .list_category_map_for_posts(Some(&[1, 2, 4]))
            .unwrap();

        assert_eq!(store.reads.get(), 1);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&2].len(), 2);
        assert!(!map.contains_key(&4));
        assert_eq!(service.lookup.category_calls.get(), 2);
    }

    #[test]
    fn category_map_for_absent_or_empty_ids_skips_storage() {
        let store = MemoryStore::with_rows(&[(1, 10)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        assert!(service.list_category_map_for_posts(None).unwrap().is_empty());
        assert!(service.list_category_map_for_posts(Some(&[])).unwrap().is_empty());
        assert_eq!(store.reads.get(), 0);
    }

    #[test]
    fn dangling_category_is_reported_as_lookup_error() {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 500)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let err = service.list_categories_for_post(1).unwrap_err();
        assert!(matches!(
            err,
            PostCategoryServiceError::Lookup {
                kind: EntityKind::Category,
                id: 500
            }
        ));
    }

    #[test]
    fn page_reports_dangling_post_on_short_page() {
        let store = MemoryStore::with_rows(&[(1, 10), (700, 10), (2, 10)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let err = service
            .page_posts_for_category(10, &PageRequest::new(0, 3))
            .unwrap_err();
        assert!(matches!(
            err,
            PostCategoryServiceError::Lookup {
                kind: EntityKind::Post,
                id: 700
            }
        ));
    }

    #[test]
    fn page_reports_dangling_post_outside_requested_page() {
        // Sorted by id descending, post 700 is never on page 0.
        let store = MemoryStore::with_rows(&[(1, 10), (2, 10), (700, 10)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        for page in [0, 1, 5] {
            let err = service
                .page_posts_for_category(10, &PageRequest::new(page, 1))
                .unwrap_err();
            assert!(matches!(
                err,
                PostCategoryServiceError::Lookup {
                    kind: EntityKind::Post,
                    id: 700
                }
            ));
        }
    }

    #[test]
    fn page_rejects_zero_size() {
        let store = MemoryStore::default();
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let err = service
            .page_posts_for_category(10, &PageRequest::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, PostCategoryServiceError::InvalidPageRequest(_)));
    }

    #[test]
    fn id_and_record_listings_share_the_service_error_type() -> ServiceResult<()> {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 20), (2, 20)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        assert_eq!(service.list_category_ids_for_post(1)?, ids(&[10, 20]));
        assert_eq!(service.list_by_post_id(1)?.len(), 2);
        assert_eq!(service.list_by_category_id(20)?.len(), 2);
        assert_eq!(service.list_categories_for_post(1)?.len(), 2);
        Ok(())
    }

    #[test]
    fn remove_by_post_returns_deleted_records() {
        let store = MemoryStore::with_rows(&[(1, 10), (1, 20), (2, 20)]);
        let service = PostCategoryService::new(&store, RangeLookup::new());

        let removed = service.remove_by_post(&store, 1).unwrap();

        assert_eq!(category_ids(&removed), ids(&[10, 20]));
        assert!(service.list_category_ids_for_post(1).unwrap().is_empty());
        assert!(service.remove_by_post(&store, 1).unwrap().is_empty());
    }
}
