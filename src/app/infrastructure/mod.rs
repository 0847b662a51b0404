//! Infrastructure layer - external integrations.
//!
//! This module contains code that interfaces with the host desktop:
//! - Platform-specific detection (dark mode, icon theme name)
//! - Freedesktop icon theme lookup
//! - Toolkit font inventory

pub mod fonts;
pub mod icon_theme;
pub mod platform;
