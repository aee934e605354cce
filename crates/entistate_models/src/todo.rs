//! The Todo entity.

use chrono::{DateTime, Utc};
use entistate_adapter::{Entity, Patch};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque identifier of a todo.
///
/// Assigned by the server on create; never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A todo belonging to a doer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned id.
    pub id: TodoId,
    /// Short title.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Workflow status label.
    pub status: String,
    /// Creation time, server-assigned.
    pub created_at: DateTime<Utc>,
    /// Last update time, server-assigned.
    pub updated_at: DateTime<Utc>,
    /// Foreign key to the owning doer. Not enforced locally.
    pub doer_id: u64,
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> TodoId {
        self.id.clone()
    }
}

/// Orders todos by creation time, oldest first.
///
/// The comparator the todos store is constructed with.
pub fn by_created_at(a: &Todo, b: &Todo) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

/// Create payload for a todo.
///
/// Id and timestamps are assigned by the server and therefore absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    /// Short title.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Workflow status label.
    pub status: String,
    /// Foreign key to the owning doer.
    pub doer_id: u64,
}

/// Partial changes to a todo.
///
/// Absent fields leave the target untouched. Id and timestamps cannot
/// be patched from the client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New owning doer, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doer_id: Option<u64>,
}

impl TodoPatch {
    /// Patch that only changes the status.
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Patch that only renames the todo.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Patch<Todo> for TodoPatch {
    fn apply(&self, target: &mut Todo) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(description) = &self.description {
            target.description = description.clone();
        }
        if let Some(status) = &self.status {
            target.status = status.clone();
        }
        if let Some(doer_id) = self.doer_id {
            target.doer_id = doer_id;
        }
    }
}
