// file: src/api/client.rs
// version: 1.0.0
// guid: a9f04d63-2e81-4b57-90c4-6d3a81f5e2b7

//! REST implementation of the data service

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::config::SessionConfig;
use crate::{PermsError, Result};

use super::soql::escape_literal;
use super::types::{
    FieldDescriptor, FieldPermission, PermissionSetRecord, QueryResponse, SaveError, SaveResult,
    UserRecord,
};
use super::DataService;

/// Which query engine a statement runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryEndpoint {
    Rest,
    Tooling,
}

impl QueryEndpoint {
    fn path(self) -> &'static str {
        match self {
            QueryEndpoint::Rest => "query",
            QueryEndpoint::Tooling => "tooling/query",
        }
    }
}

/// Reqwest-backed client for the org's REST and Tooling APIs
pub struct RestClient {
    http: reqwest::Client,
    session: SessionConfig,
}

impl RestClient {
    /// Create a new client for an authenticated session
    pub fn new(session: SessionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    fn data_url(&self, path: &str) -> Result<Url> {
        let raw = format!(
            "{}/services/data/v{}/{}",
            self.session.instance_url.trim_end_matches('/'),
            self.session.api_version,
            path
        );
        Ok(Url::parse(&raw)?)
    }

    async fn run_query<T: DeserializeOwned>(
        &self,
        endpoint: QueryEndpoint,
        soql: &str,
    ) -> Result<Vec<T>> {
        let url = self.data_url(endpoint.path())?;
        debug!("Running query against {}: {}", endpoint.path(), soql);

        let response = self
            .http
            .get(url)
            .query(&[("q", soql)])
            .bearer_auth(&self.session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PermsError::api(format!(
                "Query failed with status {}: {}",
                status, body
            )));
        }

        let envelope: QueryResponse<T> = response.json().await?;
        Ok(envelope.records)
    }

    /// Decode a rejected write into per-record failures carrying the
    /// store's error messages
    fn failed_results(status: StatusCode, body: &str) -> Result<Vec<SaveResult>> {
        match serde_json::from_str::<Vec<SaveError>>(body) {
            Ok(errors) if !errors.is_empty() => Ok(vec![SaveResult::failed(errors)]),
            _ => Err(PermsError::api(format!(
                "Write failed with status {}: {}",
                status, body
            ))),
        }
    }
}

fn field_candidates_soql(object: &str, field: &str) -> String {
    // The store's own name comparison can be case-inconsistent, so this
    // matches with LIKE and leaves exact selection to the caller.
    format!(
        "SELECT IsPermissionable, QualifiedApiName, IsUpdatable \
         FROM EntityParticle \
         WHERE EntityDefinition.QualifiedApiName = '{}' \
         AND QualifiedApiName LIKE '{}'",
        escape_literal(object),
        escape_literal(field)
    )
}

fn user_soql(username: &str) -> String {
    format!(
        "SELECT Id, ProfileId FROM User WHERE Username = '{}' LIMIT 1",
        escape_literal(username)
    )
}

fn permission_set_soql(profile_id: &str) -> String {
    format!(
        "SELECT Id FROM PermissionSet WHERE ProfileId = '{}'",
        escape_literal(profile_id)
    )
}

fn field_permissions_soql(parent_id: &str, object: &str, field: &str) -> String {
    format!(
        "SELECT Id, ParentId, SobjectType, Field, PermissionsRead, PermissionsEdit \
         FROM FieldPermissions \
         WHERE ParentId = '{}' AND SobjectType = '{}' AND Field = '{}'",
        escape_literal(parent_id),
        escape_literal(object),
        escape_literal(field)
    )
}

#[async_trait]
impl DataService for RestClient {
    async fn field_candidates(&self, object: &str, field: &str) -> Result<Vec<FieldDescriptor>> {
        self.run_query(QueryEndpoint::Tooling, &field_candidates_soql(object, field))
            .await
    }

    async fn user_by_username(&self, username: &str) -> Result<Vec<UserRecord>> {
        self.run_query(QueryEndpoint::Rest, &user_soql(username))
            .await
    }

    async fn permission_set_for_profile(
        &self,
        profile_id: &str,
    ) -> Result<Vec<PermissionSetRecord>> {
        self.run_query(QueryEndpoint::Rest, &permission_set_soql(profile_id))
            .await
    }

    async fn field_permissions(
        &self,
        parent_id: &str,
        object: &str,
        field: &str,
    ) -> Result<Vec<FieldPermission>> {
        self.run_query(
            QueryEndpoint::Rest,
            &field_permissions_soql(parent_id, object, field),
        )
        .await
    }

    async fn create_field_permission(&self, record: &FieldPermission) -> Result<Vec<SaveResult>> {
        let url = self.data_url("sobjects/FieldPermissions")?;
        debug!("Creating permission record for {}", record.field);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.session.access_token)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let result: SaveResult = response.json().await?;
            return Ok(vec![result]);
        }

        let body = response.text().await.unwrap_or_default();
        Self::failed_results(status, &body)
    }

    async fn update_field_permission(&self, record: &FieldPermission) -> Result<Vec<SaveResult>> {
        let id = record
            .id
            .as_deref()
            .ok_or_else(|| PermsError::unexpected("Cannot update a permission record without an id"))?;

        let url = self.data_url(&format!("sobjects/FieldPermissions/{}", id))?;
        debug!("Updating permission record {} for {}", id, record.field);

        // Identity fields are not writable on update; only the flags go
        // in the patch body.
        let body = json!({
            "PermissionsRead": record.permissions_read,
            "PermissionsEdit": record.permissions_edit,
        });

        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.session.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(vec![SaveResult::ok(Some(id.to_string()))]);
        }

        let text = response.text().await.unwrap_or_default();
        Self::failed_results(status, &text)
    }
}
