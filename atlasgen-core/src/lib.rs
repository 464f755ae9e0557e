//! Core utilities for the Atlas module generator.
//!
//! This crate provides the filesystem and naming primitives used across
//! the atlasgen ecosystem.

mod fs;
mod naming;

// File operations
pub use fs::{Error, OverwritePolicy, Result, WriteResult, ensure_dir, write_file};
// String utilities
pub use naming::{to_resource_name, to_symbol_name};
