//! Shared types for the SwiftCart kiosk engine
//!
//! Common types used across the workspace: catalog and cart models,
//! error types, localization tables, and small utilities.

pub mod error;
pub mod i18n;
pub mod models;
pub mod util;

// Re-exports
pub use error::KioskError;
pub use serde::{Deserialize, Serialize};
