// file: src/api/types.rs
// version: 1.0.0
// guid: b6e91c28-4d07-4f5a-93b2-8c1f60d4e73a

//! Wire models for the REST and Tooling query APIs

use serde::{Deserialize, Serialize};

/// Envelope returned by the query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse<T> {
    pub total_size: u32,
    pub done: bool,
    pub records: Vec<T>,
}

/// Field metadata row from the Tooling API (`EntityParticle`)
///
/// Describes whether a field can receive permission grants at all and
/// whether edit grants are legal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldDescriptor {
    pub qualified_api_name: String,
    pub is_permissionable: bool,
    pub is_updatable: bool,
}

/// One `FieldPermissions` row binding a permission container to a
/// field's read/edit flags
///
/// At most one such row should exist per (container, field) pair; the
/// assigner enforces this by querying before writing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldPermission {
    /// Absent until the record has been persisted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// Permission container (permission set) owning the grant
    pub parent_id: String,

    /// Object API name
    pub sobject_type: String,

    /// Fully qualified field name, `Object.Field`
    pub field: String,

    pub permissions_read: bool,
    pub permissions_edit: bool,
}

impl FieldPermission {
    /// Build an unpersisted record for the given container and field
    pub fn new(parent_id: &str, object: &str, field: &str, read: bool, edit: bool) -> Self {
        Self {
            id: None,
            parent_id: parent_id.to_string(),
            sobject_type: object.to_string(),
            field: format!("{}.{}", object, field),
            permissions_read: read,
            permissions_edit: edit,
        }
    }
}

/// User row resolving a username to its profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    pub id: String,
    pub profile_id: String,
}

/// Permission set row (a profile's implicit container)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionSetRecord {
    pub id: String,
}

/// Per-record outcome of a create or update call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SaveError>,
}

impl SaveResult {
    /// Outcome for a write the store accepted
    pub fn ok(id: Option<String>) -> Self {
        Self {
            id,
            success: true,
            errors: Vec::new(),
        }
    }

    /// Outcome for a write the store rejected
    pub fn failed(errors: Vec<SaveError>) -> Self {
        Self {
            id: None,
            success: false,
            errors,
        }
    }
}

/// One error message attached to a rejected write
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveError {
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
}
