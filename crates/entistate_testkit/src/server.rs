//! In-memory REST server for one resource.
//!
//! Routes requests directly without network overhead, speaking the same
//! CRUD protocol as a real backend: list, get, create (server-assigned
//! id and timestamps), shallow-merge update, delete.

use chrono::Utc;
use entistate_store::{HttpClient, HttpResponse, Method};
use parking_lot::Mutex;
use serde_json::{Map, Value};

/// How the server mints ids for created entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Numeric ids from a counter (doers).
    Number,
    /// Random uuid text ids (todos).
    Text,
}

/// A loopback server holding one resource's entities as JSON objects.
///
/// Implements [`HttpClient`], so a [`ResourceClient`]
/// (entistate_store::ResourceClient) built on the same base URL talks to
/// it like a remote backend. Failure injection covers both transport
/// errors and HTTP error statuses.
pub struct InMemoryApi {
    base_url: String,
    id_kind: IdKind,
    timestamps: bool,
    rows: Mutex<Vec<Value>>,
    next_id: Mutex<u64>,
    offline: Mutex<Option<String>>,
    forced_status: Mutex<Option<u16>>,
}

impl InMemoryApi {
    /// Creates an empty server answering under `base_url`, with numeric
    /// ids and no timestamps.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            id_kind: IdKind::Number,
            timestamps: false,
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            offline: Mutex::new(None),
            forced_status: Mutex::new(None),
        }
    }

    /// Mints uuid text ids instead of numeric ones.
    pub fn with_text_ids(mut self) -> Self {
        self.id_kind = IdKind::Text;
        self
    }

    /// Assigns `createdAt`/`updatedAt` on create and bumps `updatedAt`
    /// on update.
    pub fn with_timestamps(mut self) -> Self {
        self.timestamps = true;
        self
    }

    /// Returns the base URL the server answers under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seeds the server with pre-existing entities.
    ///
    /// Rows must be JSON objects carrying an `id`; the numeric id
    /// counter is advanced past the largest seeded id.
    pub fn seed(&self, rows: Vec<Value>) {
        let mut next_id = self.next_id.lock();
        for row in &rows {
            if let Some(id) = row.get("id").and_then(Value::as_u64) {
                *next_id = (*next_id).max(id + 1);
            }
        }
        *self.rows.lock() = rows;
    }

    /// Seeds the server from typed entities.
    pub fn seed_entities<T: serde::Serialize>(&self, entities: &[T]) {
        let rows = entities
            .iter()
            .map(|e| serde_json::to_value(e).expect("entity serializes"))
            .collect();
        self.seed(rows);
    }

    /// Makes every following request fail at the transport level.
    pub fn go_offline(&self, message: impl Into<String>) {
        *self.offline.lock() = Some(message.into());
    }

    /// Restores transport connectivity.
    pub fn go_online(&self) {
        *self.offline.lock() = None;
    }

    /// Forces every following request to answer with this status.
    pub fn force_status(&self, status: u16) {
        *self.forced_status.lock() = Some(status);
    }

    /// Clears a forced status.
    pub fn clear_forced_status(&self) {
        *self.forced_status.lock() = None;
    }

    /// Returns a snapshot of the stored rows.
    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().clone()
    }

    fn mint_id(&self) -> Value {
        match self.id_kind {
            IdKind::Number => {
                let mut next_id = self.next_id.lock();
                let id = *next_id;
                *next_id += 1;
                Value::from(id)
            }
            IdKind::Text => Value::from(uuid::Uuid::new_v4().to_string()),
        }
    }

    fn handle(&self, method: Method, id: Option<&str>, body: Option<&[u8]>) -> HttpResponse {
        let mut rows = self.rows.lock();
        match (method, id) {
            (Method::Get, None) => json_response(200, &Value::Array(rows.clone())),
            (Method::Get, Some(id)) => match rows.iter().find(|row| id_matches(row, id)) {
                Some(row) => json_response(200, row),
                None => HttpResponse::status(404),
            },
            (Method::Post, None) => {
                let Some(mut entity) = parse_object(body) else {
                    return HttpResponse::status(400);
                };
                entity.insert("id".to_string(), self.mint_id());
                if self.timestamps {
                    let now = Value::from(Utc::now().to_rfc3339());
                    entity.insert("createdAt".to_string(), now.clone());
                    entity.insert("updatedAt".to_string(), now);
                }
                let entity = Value::Object(entity);
                rows.push(entity.clone());
                json_response(201, &entity)
            }
            (Method::Put, Some(id)) => {
                let Some(changes) = parse_object(body) else {
                    return HttpResponse::status(400);
                };
                let Some(row) = rows.iter_mut().find(|row| id_matches(row, id)) else {
                    return HttpResponse::status(404);
                };
                let Some(target) = row.as_object_mut() else {
                    return HttpResponse::status(500);
                };
                // Shallow merge; the id is not overwritable.
                for (key, value) in changes {
                    if key != "id" {
                        target.insert(key, value);
                    }
                }
                if self.timestamps {
                    target.insert("updatedAt".to_string(), Value::from(Utc::now().to_rfc3339()));
                }
                json_response(200, &row.clone())
            }
            (Method::Delete, Some(id)) => {
                let before = rows.len();
                rows.retain(|row| !id_matches(row, id));
                if rows.len() == before {
                    HttpResponse::status(404)
                } else {
                    HttpResponse::status(204)
                }
            }
            _ => HttpResponse::status(405),
        }
    }
}

impl HttpClient for InMemoryApi {
    fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, String> {
        if let Some(message) = self.offline.lock().clone() {
            return Err(message);
        }
        if let Some(status) = *self.forced_status.lock() {
            return Ok(HttpResponse::status(status));
        }
        let Some(rest) = url.strip_prefix(self.base_url.as_str()) else {
            return Ok(HttpResponse::status(404));
        };
        let id = rest.trim_start_matches('/');
        let id = if id.is_empty() { None } else { Some(id) };
        Ok(self.handle(method, id, body))
    }
}

fn id_matches(row: &Value, id: &str) -> bool {
    match row.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

fn parse_object(body: Option<&[u8]>) -> Option<Map<String, Value>> {
    let value: Value = serde_json::from_slice(body?).ok()?;
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn json_response(status: u16, value: &Value) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_vec(value).expect("json serializes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(api: &InMemoryApi, url: &str) -> HttpResponse {
        api.send(Method::Get, url, None).unwrap()
    }

    #[test]
    fn list_starts_empty() {
        let api = InMemoryApi::new("http://test/api/doers");
        let response = get(&api, "http://test/api/doers");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"[]");
    }

    #[test]
    fn create_assigns_sequential_numeric_ids() {
        let api = InMemoryApi::new("http://test/api/doers");
        let body = serde_json::to_vec(&json!({"firstName": "Jane"})).unwrap();
        let response = api
            .send(Method::Post, "http://test/api/doers", Some(&body))
            .unwrap();
        assert_eq!(response.status, 201);
        let created: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(created["id"], 1);

        let response = api
            .send(Method::Post, "http://test/api/doers", Some(&body))
            .unwrap();
        let created: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(created["id"], 2);
    }

    #[test]
    fn create_with_text_ids_and_timestamps() {
        let api = InMemoryApi::new("http://test/api/todos")
            .with_text_ids()
            .with_timestamps();
        let body = serde_json::to_vec(&json!({"name": "write"})).unwrap();
        let response = api
            .send(Method::Post, "http://test/api/todos", Some(&body))
            .unwrap();
        let created: Value = serde_json::from_slice(&response.body).unwrap();
        assert!(created["id"].is_string());
        assert!(created["createdAt"].is_string());
        assert_eq!(created["createdAt"], created["updatedAt"]);
    }

    #[test]
    fn get_by_id_and_missing() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.seed(vec![json!({"id": 7, "firstName": "George"})]);

        let response = get(&api, "http://test/api/doers/7");
        assert_eq!(response.status, 200);

        let response = get(&api, "http://test/api/doers/8");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn put_merges_shallowly_and_keeps_id() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.seed(vec![json!({"id": 1, "firstName": "Jane", "lastName": "Doe"})]);

        let body = serde_json::to_vec(&json!({"lastName": "Smith", "id": 99})).unwrap();
        let response = api
            .send(Method::Put, "http://test/api/doers/1", Some(&body))
            .unwrap();
        let updated: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["firstName"], "Jane");
        assert_eq!(updated["lastName"], "Smith");
    }

    #[test]
    fn delete_removes_row() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.seed(vec![json!({"id": 1})]);

        let response = api.send(Method::Delete, "http://test/api/doers/1", None).unwrap();
        assert_eq!(response.status, 204);
        assert!(api.rows().is_empty());

        let response = api.send(Method::Delete, "http://test/api/doers/1", None).unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn offline_fails_at_transport_level() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.go_offline("network unreachable");
        let err = api.send(Method::Get, "http://test/api/doers", None).unwrap_err();
        assert_eq!(err, "network unreachable");

        api.go_online();
        assert_eq!(get(&api, "http://test/api/doers").status, 200);
    }

    #[test]
    fn forced_status_answers_every_request() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.force_status(503);
        assert_eq!(get(&api, "http://test/api/doers").status, 503);
        api.clear_forced_status();
        assert_eq!(get(&api, "http://test/api/doers").status, 200);
    }

    #[test]
    fn seed_advances_id_counter() {
        let api = InMemoryApi::new("http://test/api/doers");
        api.seed(vec![json!({"id": 41})]);
        let body = serde_json::to_vec(&json!({"firstName": "Max"})).unwrap();
        let response = api
            .send(Method::Post, "http://test/api/doers", Some(&body))
            .unwrap();
        let created: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(created["id"], 42);
    }
}
