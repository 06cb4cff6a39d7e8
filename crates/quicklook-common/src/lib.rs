//! Common types shared across the quicklook display crates.

pub mod color;
pub mod error;

pub use color::{ColorTable, Rgb};
pub use error::{DisplayError, DisplayResult};
