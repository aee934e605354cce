//! The remote-synced entity store.

use crate::http::HttpClient;
use crate::resource::ResourceClient;
use crate::StoreError;
use entistate_adapter::{Entity, EntityAdapter, EntityState};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Keeps one normalized collection synchronized with a remote resource.
///
/// The store is the sole owner of its collection; consumers read through
/// the selectors and mutate only via the remote operations. Every
/// operation starts by setting `loading = true` and clearing `error`,
/// and ends with `loading = false` on success and failure alike. A
/// failed operation leaves the collection unchanged.
///
/// The store takes `&mut self`, so two operations on one store cannot
/// overlap; it is meant for single-consumer, event-driven use and is not
/// a thread-safe container.
pub struct RemoteStore<T: Entity, C> {
    /// Adapter fixed at construction; carries the sort comparator.
    adapter: EntityAdapter<T>,
    /// The current collection value.
    state: EntityState<T>,
    /// True while a remote operation is in flight.
    loading: bool,
    /// Message of the last failed operation, cleared on the next one.
    error: Option<String>,
    /// Typed client for the remote resource.
    client: ResourceClient<C>,
}

impl<T, C> RemoteStore<T, C>
where
    T: Entity + DeserializeOwned,
    T::Id: fmt::Display,
    C: HttpClient,
{
    /// Creates a store over `client`, starting from the empty collection.
    pub fn new(adapter: EntityAdapter<T>, client: ResourceClient<C>) -> Self {
        let state = adapter.initial();
        Self {
            adapter,
            state,
            loading: false,
            error: None,
            client,
        }
    }

    /// Returns the current collection value.
    pub fn state(&self) -> &EntityState<T> {
        &self.state
    }

    /// Returns all entities in collection order.
    pub fn all(&self) -> Vec<&T> {
        self.state.select_all()
    }

    /// Looks up an entity by id in the local collection.
    pub fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.state.select_by_id(id)
    }

    /// Returns the number of entities held locally.
    pub fn total(&self) -> usize {
        self.state.select_total()
    }

    /// Returns true while a remote operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last failure message, if the most recent operation
    /// failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the full entity list and replaces the collection.
    ///
    /// Full-replace semantics: entities added locally but unknown to the
    /// server are dropped. Returns false on failure.
    pub fn fetch_all(&mut self) -> bool {
        self.begin("fetch_all");
        match self.client.list::<T>() {
            Ok(entities) => {
                self.state = self.adapter.set_all(entities);
                self.finish();
                true
            }
            Err(err) => {
                self.fail("fetch_all", err);
                false
            }
        }
    }

    /// Fetches one entity by id and upserts it into the collection.
    pub fn fetch_one(&mut self, id: &T::Id) -> Option<T> {
        self.begin("fetch_one");
        match self.client.get::<T>(id) {
            Ok(entity) => {
                self.state = self.adapter.upsert_one(&self.state, entity.clone());
                self.finish();
                Some(entity)
            }
            Err(err) => {
                self.fail("fetch_one", err);
                None
            }
        }
    }

    /// Creates an entity from a draft and adds the server's entity to
    /// the collection.
    pub fn create<D: Serialize>(&mut self, draft: &D) -> Option<T> {
        self.begin("create");
        match self.client.create::<D, T>(draft) {
            Ok(entity) => {
                self.state = self.adapter.add_one(&self.state, entity.clone());
                self.finish();
                Some(entity)
            }
            Err(err) => {
                self.fail("create", err);
                None
            }
        }
    }

    /// Sends a partial update and folds the server's authoritative
    /// entity back into the collection.
    ///
    /// The local fold mirrors `update_one`: an id the collection does
    /// not hold is left alone even when the remote update succeeded.
    /// The returned entity carries the server's merge either way.
    pub fn update<P: Serialize>(&mut self, id: &T::Id, patch: &P) -> Option<T> {
        self.begin("update");
        match self.client.update::<P, T>(id, patch) {
            Ok(entity) => {
                if self.state.contains(id) {
                    self.state = self.adapter.set_one(&self.state, entity.clone());
                }
                self.finish();
                Some(entity)
            }
            Err(err) => {
                self.fail("update", err);
                None
            }
        }
    }

    /// Deletes an entity remotely, then locally. Returns whether the
    /// remote call succeeded.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        self.begin("remove");
        match self.client.delete(id) {
            Ok(()) => {
                self.state = self.adapter.remove_one(&self.state, id);
                self.finish();
                true
            }
            Err(err) => {
                self.fail("remove", err);
                false
            }
        }
    }

    fn begin(&mut self, op: &'static str) {
        tracing::debug!(op, resource = self.client.base_url(), "store operation");
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self) {
        self.loading = false;
    }

    fn fail(&mut self, op: &'static str, err: StoreError) {
        tracing::warn!(op, error = %err, "store operation failed");
        self.error = Some(err.to_string());
        self.loading = false;
    }
}

impl<T: Entity, C> fmt::Debug for RemoteStore<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStore")
            .field("total", &self.state.select_total())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, Method};
    use serde::Deserialize;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Entity for Note {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    /// Replays scripted responses in order.
    struct ScriptedClient {
        responses: Mutex<Vec<Result<HttpResponse, String>>>,
        requests: Mutex<Vec<(Method, String)>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<HttpResponse, String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpClient for ScriptedClient {
        fn send(
            &self,
            method: Method,
            url: &str,
            _body: Option<&[u8]>,
        ) -> Result<HttpResponse, String> {
            self.requests.lock().unwrap().push((method, url.to_string()));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Err("no response scripted".to_string())
            } else {
                responses.remove(0)
            }
        }
    }

    fn store_with(
        responses: Vec<Result<HttpResponse, String>>,
    ) -> RemoteStore<Note, ScriptedClient> {
        let adapter = EntityAdapter::with_sort_comparer(|a: &Note, b: &Note| a.id.cmp(&b.id));
        let client = ResourceClient::new("http://api/notes", ScriptedClient::new(responses));
        RemoteStore::new(adapter, client)
    }

    #[test]
    fn fetch_all_replaces_collection() {
        let mut store = store_with(vec![Ok(HttpResponse::ok(
            r#"[{"id": 2, "text": "b"}, {"id": 1, "text": "a"}]"#,
        ))]);
        assert!(store.fetch_all());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        // Comparator orders by id ascending.
        let ids: Vec<u32> = store.all().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn fetch_all_failure_leaves_collection_unchanged() {
        let mut store = store_with(vec![
            Ok(HttpResponse::ok(r#"[{"id": 1, "text": "a"}]"#)),
            Err("connection reset".to_string()),
        ]);
        assert!(store.fetch_all());
        let before = store.state().clone();

        assert!(!store.fetch_all());
        assert!(!store.is_loading());
        let error = store.error().unwrap();
        assert!(!error.is_empty());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn error_cleared_by_next_operation() {
        let mut store = store_with(vec![
            Err("offline".to_string()),
            Ok(HttpResponse::ok("[]")),
        ]);
        assert!(!store.fetch_all());
        assert!(store.error().is_some());

        assert!(store.fetch_all());
        assert!(store.error().is_none());
    }

    #[test]
    fn fetch_one_upserts_and_returns() {
        let mut store = store_with(vec![Ok(HttpResponse::ok(r#"{"id": 5, "text": "note"}"#))]);
        let note = store.fetch_one(&5).unwrap();
        assert_eq!(note.text, "note");
        assert_eq!(store.find_by_id(&5), Some(&note));
    }

    #[test]
    fn fetch_one_missing_is_absorbed() {
        let mut store = store_with(vec![Ok(HttpResponse::status(404))]);
        assert!(store.fetch_one(&9).is_none());
        assert_eq!(store.error(), Some("request failed with status 404"));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn create_adds_server_entity() {
        let mut store = store_with(vec![Ok(HttpResponse::ok(r#"{"id": 10, "text": "fresh"}"#))]);
        let draft = serde_json::json!({"text": "fresh"});
        let created = store.create(&draft).unwrap();
        assert_eq!(created.id, 10);
        assert_eq!(store.total(), 1);
    }

    #[test]
    fn create_failure_returns_none() {
        let mut store = store_with(vec![Ok(HttpResponse::status(500))]);
        let draft = serde_json::json!({"text": "fresh"});
        assert!(store.create(&draft).is_none());
        assert_eq!(store.total(), 0);
        assert!(store.error().is_some());
    }

    #[test]
    fn update_folds_authoritative_entity_back() {
        let mut store = store_with(vec![
            Ok(HttpResponse::ok(r#"[{"id": 1, "text": "old"}]"#)),
            Ok(HttpResponse::ok(r#"{"id": 1, "text": "new"}"#)),
        ]);
        assert!(store.fetch_all());

        let patch = serde_json::json!({"text": "new"});
        let updated = store.update(&1, &patch).unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(store.find_by_id(&1).unwrap().text, "new");
        assert_eq!(store.total(), 1);
    }

    #[test]
    fn update_of_absent_id_leaves_collection_unchanged() {
        // The server knows the entity, the store never fetched it. The
        // local fold follows update_one semantics: no insertion.
        let mut store = store_with(vec![Ok(HttpResponse::ok(r#"{"id": 7, "text": "merged"}"#))]);

        let patch = serde_json::json!({"text": "merged"});
        let updated = store.update(&7, &patch).unwrap();
        assert_eq!(updated.text, "merged");
        assert_eq!(store.total(), 0);
        assert!(store.error().is_none());
    }

    #[test]
    fn remove_deletes_remotely_then_locally() {
        let mut store = store_with(vec![
            Ok(HttpResponse::ok(r#"[{"id": 1, "text": "a"}]"#)),
            Ok(HttpResponse::status(204)),
        ]);
        assert!(store.fetch_all());
        assert!(store.remove(&1));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn remove_failure_keeps_entity() {
        let mut store = store_with(vec![
            Ok(HttpResponse::ok(r#"[{"id": 1, "text": "a"}]"#)),
            Err("timeout".to_string()),
        ]);
        assert!(store.fetch_all());
        assert!(!store.remove(&1));
        assert_eq!(store.total(), 1);
        assert!(store.error().unwrap().contains("timeout"));
    }
}
