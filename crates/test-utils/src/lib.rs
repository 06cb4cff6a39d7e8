//! Shared test utilities for the quicklook workspace.
//!
//! This crate provides synthetic array generators with predictable,
//! verifiable value patterns, so tests can assert exact cross-section,
//! layout and normalization behavior without fixture files.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{ramp_volume, striped_labels};
//! ```

pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;
