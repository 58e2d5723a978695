// ── Generic resource store ──
//
// Holds the last-fetched collection and single entity for one resource,
// plus loading/error flags. Every field is a `watch` channel so views can
// read snapshots or subscribe to changes.
//
// Actions are not serialized against each other: two overlapping actions
// interleave on the shared fields and whichever resumes last wins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use staffdesk_api::{Id, Identified, ResourceApi, StaffDirectory};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::messages::{Action, FETCH_BY_DEPARTMENT_FAILED, StoreEntity};
use crate::error::{CoreError, ErrorKind};
use crate::stream::EntityStream;

/// Reactive state container for one resource type.
pub struct ResourceStore<A: ResourceApi> {
    api: A,
    collection: watch::Sender<Arc<Vec<A::Entity>>>,
    current: watch::Sender<Option<A::Entity>>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
    error_kind: watch::Sender<Option<ErrorKind>>,
    last_fetched: watch::Sender<Option<DateTime<Utc>>>,
}

/// Clears `loading` when the action ends, however it ends.
struct LoadingGuard<'a>(&'a watch::Sender<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl<A> ResourceStore<A>
where
    A: ResourceApi,
    A::Entity: StoreEntity,
{
    pub fn new(api: A) -> Self {
        let (collection, _) = watch::channel(Arc::new(Vec::new()));
        let (current, _) = watch::channel(None);
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);
        let (error_kind, _) = watch::channel(None);
        let (last_fetched, _) = watch::channel(None);

        Self {
            api,
            collection,
            current,
            loading,
            error,
            error_kind,
            last_fetched,
        }
    }

    /// The resource client this store drives.
    pub fn api(&self) -> &A {
        &self.api
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn collection(&self) -> Arc<Vec<A::Entity>> {
        self.collection.borrow().clone()
    }

    pub fn current(&self) -> Option<A::Entity> {
        self.current.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Classification of the failure behind `error`.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        *self.error_kind.borrow()
    }

    /// When a list-replacing action last succeeded.
    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        *self.last_fetched.borrow()
    }

    /// How long ago the collection was last replaced, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_fetched().map(|t| Utc::now() - t)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_collection(&self) -> EntityStream<A::Entity> {
        EntityStream::new(self.collection.subscribe())
    }

    pub fn subscribe_current(&self) -> watch::Receiver<Option<A::Entity>> {
        self.current.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    // ── Read actions (failures are recorded, never returned) ─────────

    /// Replace the collection with every entity.
    pub async fn fetch_all(&self) {
        let _loading = self.begin();
        match self.api.list_all().await {
            Ok(items) => self.replace_collection(Action::FetchAll, items),
            Err(err) => self.fail(Action::FetchAll, &err.into()),
        }
    }

    /// Replace `current` with the entity with this id.
    pub async fn fetch_by_id(&self, id: Id) {
        let _loading = self.begin();
        match self.api.get_by_id(id).await {
            Ok(entity) => self.replace_current(Action::FetchById, entity),
            Err(err) => self.fail(Action::FetchById, &err.into()),
        }
    }

    /// Replace `current` with the entity with this business key.
    pub async fn fetch_by_key(&self, key: &str) {
        let _loading = self.begin();
        match self.api.get_by_key(key).await {
            Ok(entity) => self.replace_current(Action::FetchByKey, entity),
            Err(err) => self.fail(Action::FetchByKey, &err.into()),
        }
    }

    /// Replace the collection with the backend's name-search results.
    pub async fn search(&self, name: &str) {
        let _loading = self.begin();
        match self.api.search(name).await {
            Ok(items) => self.replace_collection(Action::Search, items),
            Err(err) => self.fail(Action::Search, &err.into()),
        }
    }

    // ── Write actions (failures are recorded and returned) ───────────

    /// Create an entity and append it to the collection.
    ///
    /// No re-sort, no duplicate-key check, `current` untouched.
    pub async fn create(&self, request: &A::Request) -> Result<A::Entity, CoreError> {
        let _loading = self.begin();
        match self.api.create(request).await {
            Ok(entity) => {
                let appended = entity.clone();
                self.collection
                    .send_modify(|items| Arc::make_mut(items).push(appended));
                debug!(kind = A::Entity::KIND, id = ?entity.id(), "appended created entity");
                Ok(entity)
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.fail(Action::Create, &err);
                Err(err)
            }
        }
    }

    /// Replace an entity on the backend.
    ///
    /// The first collection entry with this id is swapped in place. If no
    /// entry matches (empty or stale collection) the returned entity is not
    /// added, so the collection diverges from the backend until refetched.
    pub async fn update(&self, id: Id, request: &A::Request) -> Result<A::Entity, CoreError> {
        let _loading = self.begin();
        match self.api.update(id, request).await {
            Ok(entity) => {
                let replaced = self.collection.send_if_modified(|items| {
                    let Some(pos) = items.iter().position(|e| e.id() == Some(id)) else {
                        return false;
                    };
                    if let Some(slot) = Arc::make_mut(items).get_mut(pos) {
                        *slot = entity.clone();
                    }
                    true
                });
                debug!(kind = A::Entity::KIND, id, replaced, "applied update");
                Ok(entity)
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.fail(Action::Update, &err);
                Err(err)
            }
        }
    }

    /// Delete an entity and drop every collection entry with its id.
    ///
    /// `current` is left alone, so a deleted entity stays visible there
    /// until the next fetch.
    pub async fn delete(&self, id: Id) -> Result<(), CoreError> {
        let _loading = self.begin();
        match self.api.remove(id).await {
            Ok(()) => {
                let removed = self.collection.send_if_modified(|items| {
                    let before = items.len();
                    Arc::make_mut(items).retain(|e| e.id() != Some(id));
                    items.len() != before
                });
                debug!(kind = A::Entity::KIND, id, removed, "applied delete");
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.fail(Action::Delete, &err);
                Err(err)
            }
        }
    }

    // ── State transitions ────────────────────────────────────────────

    fn begin(&self) -> LoadingGuard<'_> {
        self.loading.send_replace(true);
        self.error.send_replace(None);
        self.error_kind.send_replace(None);
        LoadingGuard(&self.loading)
    }

    fn replace_collection(&self, action: Action, items: Vec<A::Entity>) {
        debug!(kind = A::Entity::KIND, %action, count = items.len(), "replacing collection");
        self.collection.send_replace(Arc::new(items));
        self.last_fetched.send_replace(Some(Utc::now()));
    }

    fn replace_current(&self, action: Action, entity: A::Entity) {
        debug!(kind = A::Entity::KIND, %action, id = ?entity.id(), "replacing current");
        self.current.send_replace(Some(entity));
    }

    fn fail(&self, action: Action, err: &CoreError) {
        let message = A::Entity::MESSAGES
            .for_action(action)
            .unwrap_or(FETCH_BY_DEPARTMENT_FAILED);
        warn!(
            kind = A::Entity::KIND,
            %action,
            write = action.is_write(),
            error = %err,
            "{message}"
        );
        self.error_kind.send_replace(Some(err.kind()));
        self.error.send_replace(Some(message.to_owned()));
    }
}

impl<A> ResourceStore<A>
where
    A: StaffDirectory,
{
    /// Replace the collection with the staff of one department.
    pub async fn fetch_by_department(&self, department_id: Id) {
        let _loading = self.begin();
        match self.api.by_department(department_id).await {
            Ok(items) => self.replace_collection(Action::FetchByDepartment, items),
            Err(err) => self.fail(Action::FetchByDepartment, &err.into()),
        }
    }
}
