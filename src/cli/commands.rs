// file: src/cli/commands.rs
// version: 1.0.0
// guid: 1f6a83d2-9b40-4c75-ae18-5d29f0c4b863

//! Command implementations for the CLI

use colored::Colorize;
use tracing::info;

use crate::api::RestClient;
use crate::config::SessionLoader;
use crate::perms::{PermissionAssigner, PermissionLevel};
use crate::Result;

/// Assign a field permission to the invoking user's profile
pub async fn assign_permission_command(
    object: &str,
    permission: &str,
    fieldname: &str,
    auth_file: Option<&str>,
) -> Result<()> {
    // Validate the requested level before touching session config or the
    // network; a bad level must fail even with no session available.
    permission.parse::<PermissionLevel>()?;

    let loader = SessionLoader::new();
    let session = match auth_file {
        Some(path) => loader.load_auth_file(path)?,
        None => loader.from_env()?,
    };

    info!(
        "Assigning {} permission on {}.{} for user {}",
        permission, object, fieldname, session.username
    );

    let username = session.username.clone();
    let client = RestClient::new(session);
    let assigner = PermissionAssigner::new(&client, &username);

    assigner.assign(object, fieldname, permission).await?;

    println!("{}", "Executed Successfully!".green());
    Ok(())
}
