// file: src/cli/mod.rs
// version: 1.0.0
// guid: 4a8d27f0-6c95-4e13-b8a6-2f07d1e93c54

//! Command line interface module

pub mod args;
pub mod commands;
