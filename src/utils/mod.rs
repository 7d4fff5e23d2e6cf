//! Utility modules
//!
//! This module contains utilities shared across the builders:
//! - Error types and result types

pub mod error;

// Re-export commonly used items
pub use error::{Error, Result};
