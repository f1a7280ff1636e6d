// file: src/logging/mod.rs
// version: 1.0.0
// guid: c4b7e2d9-1f56-4a83-9e07-6d2c84f0a5b1

//! Logging module

pub mod logger;
