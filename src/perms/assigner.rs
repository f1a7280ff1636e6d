// file: src/perms/assigner.rs
// version: 1.0.0
// guid: 6c0d93e7-4b28-4f51-a9d3-07e5b82c41f6

//! The permission assignment pipeline
//!
//! A single linear validate-then-write sequence: parse the requested
//! level, resolve field metadata and the caller's permission container,
//! check for an existing grant, then insert or update the one
//! `FieldPermissions` record. Every failure is terminal; nothing is
//! retried and no step mutates state before the final write.

use tracing::{debug, info};

use crate::api::{DataService, FieldDescriptor, FieldPermission, SaveResult};
use crate::{PermsError, Result};

use super::PermissionLevel;

/// Stateless orchestrator assigning a field permission to the invoking
/// user's profile
pub struct PermissionAssigner<'a, S: DataService> {
    service: &'a S,
    username: &'a str,
}

impl<'a, S: DataService> PermissionAssigner<'a, S> {
    /// Create a new assigner for an authenticated username
    pub fn new(service: &'a S, username: &'a str) -> Self {
        Self { service, username }
    }

    /// Ensure a permission record exists granting `requested` on
    /// `object`.`field` for the caller's profile
    ///
    /// Deliberately not idempotent: requesting a level that is already
    /// granted is an error, not a no-op.
    pub async fn assign(&self, object: &str, field: &str, requested: &str) -> Result<()> {
        let level: PermissionLevel = requested.parse()?;

        let descriptor = self.resolve_field(object, field).await?;

        if !descriptor.is_permissionable {
            return Err(PermsError::policy_violation(format!(
                "{}.{} is not permissionable",
                object, field
            )));
        }

        if !descriptor.is_updatable && level == PermissionLevel::Edit {
            return Err(PermsError::policy_violation(format!(
                "{}.{} is not updatable, so Edit permission cannot be granted",
                object, field
            )));
        }

        let profile_id = self.resolve_profile_id().await?;
        let parent_id = self.resolve_permission_set_id(&profile_id).await?;

        let qualified = format!("{}.{}", object, field);
        let existing = self
            .service
            .field_permissions(&parent_id, object, &qualified)
            .await?;
        debug!(
            "Found {} existing permission record(s) for {}",
            existing.len(),
            qualified
        );

        for record in &existing {
            let granted = match level {
                PermissionLevel::Read => record.permissions_read,
                PermissionLevel::Edit => record.permissions_edit,
            };
            if granted {
                return Err(PermsError::already_granted(format!(
                    "{} access already exists for field: {}.{}",
                    requested, object, field
                )));
            }
        }

        let results = match level {
            PermissionLevel::Read => {
                info!("Inserting Read permission for {}", qualified);
                let record = FieldPermission::new(&parent_id, object, field, true, false);
                self.service.create_field_permission(&record).await?
            }
            PermissionLevel::Edit => self.apply_edit(&existing, &parent_id, object, field).await?,
        };

        collect_save_results(&results)
    }

    /// Grant Edit, promoting an existing Read-only record in place when
    /// one exists; otherwise insert a fresh record (Edit implies Read)
    async fn apply_edit(
        &self,
        existing: &[FieldPermission],
        parent_id: &str,
        object: &str,
        field: &str,
    ) -> Result<Vec<SaveResult>> {
        if let Some(readable) = existing.iter().find(|record| record.permissions_read) {
            info!(
                "Promoting existing Read permission on {}.{} to Read+Edit",
                object, field
            );
            let mut record = readable.clone();
            record.permissions_edit = true;
            self.service.update_field_permission(&record).await
        } else {
            info!("Inserting Read+Edit permission for {}.{}", object, field);
            let record = FieldPermission::new(parent_id, object, field, true, true);
            self.service.create_field_permission(&record).await
        }
    }

    /// Resolve the field's metadata with an explicit case-insensitive
    /// scan over the store's candidates
    async fn resolve_field(&self, object: &str, field: &str) -> Result<FieldDescriptor> {
        let candidates = self.service.field_candidates(object, field).await?;

        // The candidate's stored casing may differ from what the user
        // typed, so compare both sides case-insensitively.
        candidates
            .into_iter()
            .find(|candidate| candidate.qualified_api_name.eq_ignore_ascii_case(field))
            .ok_or_else(|| {
                PermsError::not_found(format!(
                    "Field \"{}\" is not found on Object \"{}\".",
                    field, object
                ))
            })
    }

    async fn resolve_profile_id(&self) -> Result<String> {
        let users = self.service.user_by_username(self.username).await?;
        let user = users
            .into_iter()
            .next()
            .ok_or_else(|| PermsError::not_found("Username not found."))?;
        debug!("Resolved user {} to profile {}", self.username, user.profile_id);
        Ok(user.profile_id)
    }

    /// A profile always owns exactly one permission set in this model;
    /// an empty result is a store invariant violation, not a usage error
    async fn resolve_permission_set_id(&self, profile_id: &str) -> Result<String> {
        let sets = self.service.permission_set_for_profile(profile_id).await?;
        let set = sets
            .into_iter()
            .next()
            .ok_or_else(|| PermsError::unexpected("Something went wrong!"))?;
        Ok(set.id)
    }
}

/// Aggregate a write's per-record outcomes: failure messages are
/// concatenated in encounter order and any failure fails the whole call
pub fn collect_save_results(results: &[SaveResult]) -> Result<()> {
    let mut failed = false;
    let mut messages = String::new();

    for result in results {
        if !result.success {
            failed = true;
            for error in &result.errors {
                messages.push_str(&error.message);
            }
        }
    }

    if failed {
        Err(PermsError::persistence(messages))
    } else {
        Ok(())
    }
}
