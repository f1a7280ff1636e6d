// file: src/perms/mod.rs
// version: 1.0.0
// guid: 2e7c50b9-1a84-4f36-bd02-9c6e43d8a175

//! Field permission assignment pipeline

pub mod assigner;
pub mod level;

pub use assigner::PermissionAssigner;
pub use level::PermissionLevel;
