//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (IconEntry, FontFamily, BrowserSettings)
//! - `services/` - Operations behind each tool (icon rows, inversion, script conversion)
//! - `infrastructure/` - Platform detection, icon theme lookup, toolkit fonts
//! - `error.rs` / `logging.rs` - Shared error type and log setup

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod services;

// Re-exports for convenient external access
pub use domain::{BrowserSettings, FontFamily, IconEntry, ThemeMode};
pub use error::{AppError, Result};
