//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Icon table entries
//! - Font families
//! - Browser settings

pub mod font_family;
pub mod icon_entry;
pub mod settings;

pub use font_family::{FontFamily, group_families};
pub use icon_entry::{IconEntry, load_icon_table, parse_icon_table};
pub use settings::{BrowserSettings, ThemeMode};
