//! Typed JSON client for one REST resource.

use crate::error::{StoreError, StoreResult};
use crate::http::{HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A JSON client bound to one resource base path.
///
/// Speaks the plain CRUD protocol: `GET /{resource}` lists,
/// `GET /{resource}/{id}` fetches one, `POST` creates, `PUT` updates,
/// `DELETE` removes. Any non-2xx response is a failure; error bodies
/// are not parsed.
pub struct ResourceClient<C> {
    /// Base URL of the resource (e.g. `http://localhost:3000/api/todos`).
    base_url: String,
    /// HTTP client implementation.
    client: C,
}

impl<C: HttpClient> ResourceClient<C> {
    /// Creates a client for the resource at `base_url`.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    /// Returns the resource base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &impl fmt::Display) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> StoreResult<T> {
        let response = self
            .client
            .send(method, url, body.as_deref())
            .map_err(StoreError::Transport)?;
        if !response.is_success() {
            return Err(StoreError::status(response.status));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Lists all entities of the resource.
    pub fn list<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        self.request(Method::Get, &self.base_url, None)
    }

    /// Fetches one entity by id.
    pub fn get<T: DeserializeOwned>(&self, id: &impl fmt::Display) -> StoreResult<T> {
        self.request(Method::Get, &self.item_url(id), None)
    }

    /// Creates an entity from a draft; the server assigns id and
    /// timestamps and returns the full entity.
    pub fn create<B: Serialize, T: DeserializeOwned>(&self, draft: &B) -> StoreResult<T> {
        let body = serde_json::to_vec(draft)?;
        self.request(Method::Post, &self.base_url, Some(body))
    }

    /// Sends a partial update; the server returns the authoritative
    /// updated entity.
    pub fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        id: &impl fmt::Display,
        patch: &B,
    ) -> StoreResult<T> {
        let body = serde_json::to_vec(patch)?;
        self.request(Method::Put, &self.item_url(id), Some(body))
    }

    /// Deletes one entity by id. The response body is ignored.
    pub fn delete(&self, id: &impl fmt::Display) -> StoreResult<()> {
        let response = self
            .client
            .send(Method::Delete, &self.item_url(id), None)
            .map_err(StoreError::Transport)?;
        if !response.is_success() {
            return Err(StoreError::status(response.status));
        }
        Ok(())
    }
}

impl<C> fmt::Debug for ResourceClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
