// file: src/api/mod.rs
// version: 1.0.0
// guid: f3c82b50-9a16-4d7e-8103-5b4e7d29c6a8

//! Remote data service abstraction and REST implementation
//!
//! `DataService` is the seam between the assignment pipeline and the org:
//! filtered queries over field metadata, users, and permission containers,
//! plus create/update on `FieldPermissions` records returning per-record
//! outcome batches.

pub mod client;
pub mod soql;
pub mod types;

pub use client::RestClient;
pub use types::{
    FieldDescriptor, FieldPermission, PermissionSetRecord, QueryResponse, SaveError, SaveResult,
    UserRecord,
};

use crate::Result;
use async_trait::async_trait;

/// Query and CRUD operations the assignment pipeline consumes
#[async_trait]
pub trait DataService: Send + Sync {
    /// Field metadata candidates for `field` on `object`, matched with a
    /// pattern query (store-side comparison may be case-inconsistent, so
    /// callers must select the exact candidate themselves)
    async fn field_candidates(&self, object: &str, field: &str) -> Result<Vec<FieldDescriptor>>;

    /// User rows for an exact username
    async fn user_by_username(&self, username: &str) -> Result<Vec<UserRecord>>;

    /// Permission set rows owned by a profile
    async fn permission_set_for_profile(
        &self,
        profile_id: &str,
    ) -> Result<Vec<PermissionSetRecord>>;

    /// Existing permission records for the exact (container, object,
    /// qualified field) triple
    async fn field_permissions(
        &self,
        parent_id: &str,
        object: &str,
        field: &str,
    ) -> Result<Vec<FieldPermission>>;

    /// Insert a new permission record
    async fn create_field_permission(&self, record: &FieldPermission) -> Result<Vec<SaveResult>>;

    /// Update a persisted permission record in place
    async fn update_field_permission(&self, record: &FieldPermission) -> Result<Vec<SaveResult>>;
}
