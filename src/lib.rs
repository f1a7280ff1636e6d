// file: src/lib.rs
// version: 1.0.0
// guid: 9a1d4e6b-2c73-4f08-b5d9-7e3a60c1f8d4

//! # sf-field-perms
//!
//! Command-line tool for assigning field-level security permissions on a
//! platform object's field to the invoking user's profile.
//!
//! The whole tool is a single linear pipeline: validate the requested
//! permission level, resolve the field's metadata and the caller's
//! permission container through the org's query APIs, then insert or
//! update the one `FieldPermissions` record binding the two.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod perms;

pub use error::{PermsError, Result};

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
