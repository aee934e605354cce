//! The Doer entity.

use crate::validate::{validate_name, ValidationError};
use entistate_adapter::{Entity, Patch};
use entistate_table::SortKey;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A person that todos are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doer {
    /// Server-assigned numeric id.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Number of todos assigned to this doer. Defaults to 0 when the
    /// server omits it.
    #[serde(default)]
    pub total_todos: u32,
}

impl Entity for Doer {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Create payload for a doer.
///
/// Validated before submission; the id is assigned by the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoerDraft {
    /// Given name, required, at most 25 characters.
    pub first_name: String,
    /// Family name, required, at most 25 characters.
    pub last_name: String,
}

impl DoerDraft {
    /// Creates a draft from raw form input.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Validates both name fields, collecting every failure.
    ///
    /// The form disables submission while this returns `Err`.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = validate_name("First Name", &self.first_name) {
            errors.push(e);
        }
        if let Err(e) = validate_name("Last Name", &self.last_name) {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Returns true if the draft would pass validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Partial changes to a doer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoerPatch {
    /// New given name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Patch<Doer> for DoerPatch {
    fn apply(&self, target: &mut Doer) {
        if let Some(first_name) = &self.first_name {
            target.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            target.last_name = last_name.clone();
        }
    }
}

/// Sortable columns of the doer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoerColumn {
    /// Numeric id column.
    Id,
    /// Given name column, lexicographic.
    FirstName,
    /// Family name column, lexicographic.
    LastName,
    /// Todo count column, numeric.
    TotalTodos,
}

impl SortKey<Doer> for DoerColumn {
    fn compare(&self, a: &Doer, b: &Doer) -> Ordering {
        match self {
            DoerColumn::Id => a.id.cmp(&b.id),
            DoerColumn::FirstName => a.first_name.cmp(&b.first_name),
            DoerColumn::LastName => a.last_name.cmp(&b.last_name),
            DoerColumn::TotalTodos => a.total_todos.cmp(&b.total_todos),
        }
    }
}
